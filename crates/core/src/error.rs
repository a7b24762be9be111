use thiserror::Error;

use crate::model::{ProgressError, UnknownGame};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    UnknownGame(#[from] UnknownGame),
}

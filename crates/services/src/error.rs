//! Shared error types for the services crate.

use thiserror::Error;

use kids_core::model::{GameKind, ProgressError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `GameLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("{0} has no rounds to play")]
    NotPlayable(GameKind),
    #[error("choice {index} is out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}

mod catalog;
mod game;
mod prep;
mod progress;

pub use catalog::{COLORS, COUNT_MAX, COUNT_MIN, COUNT_PICTURES, Color, LETTERS, SHAPES, Shape};
pub use game::{GameKind, UnknownGame};
pub use prep::{PREP_STEPS, PrepStep};
pub use progress::{AppState, GameProgress, PrepProgress, Progress, ProgressError, STORAGE_KEY};

use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::feedback::{AudioBackend, FeedbackService};
use crate::game_loop::GameLoopService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    game_loop: Arc<GameLoopService>,
    feedback: Arc<FeedbackService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        audio: Arc<dyn AudioBackend>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, audio))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, audio: Arc<dyn AudioBackend>) -> Self {
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.documents)));
        let game_loop = Arc::new(GameLoopService::new(Arc::clone(&progress)));
        let feedback = Arc::new(FeedbackService::new(clock, audio));
        Self {
            progress,
            game_loop,
            feedback,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    #[must_use]
    pub fn feedback(&self) -> Arc<FeedbackService> {
        Arc::clone(&self.feedback)
    }
}

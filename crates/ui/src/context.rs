use std::sync::Arc;

use kids_core::model::AppState;
use services::{FeedbackService, GameLoopService, ProgressService};

pub trait UiApp: Send + Sync {
    /// Progress loaded before the window opens.
    fn initial_state(&self) -> AppState;

    fn progress(&self) -> Arc<ProgressService>;
    fn game_loop(&self) -> Arc<GameLoopService>;
    fn feedback(&self) -> Arc<FeedbackService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_state: AppState,
    progress: Arc<ProgressService>,
    game_loop: Arc<GameLoopService>,
    feedback: Arc<FeedbackService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_state: app.initial_state(),
            progress: app.progress(),
            game_loop: app.game_loop(),
            feedback: app.feedback(),
        }
    }

    #[must_use]
    pub fn initial_state(&self) -> AppState {
        self.initial_state
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

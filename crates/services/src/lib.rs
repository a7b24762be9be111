#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod feedback;
pub mod game_loop;
pub mod progress_service;

pub use kids_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, GameError, ProgressServiceError};
pub use feedback::{
    AudioBackend, AudioError, FeedbackService, NullAudio, SpeakOutcome, SpeechStatus,
};
pub use game_loop::{AnswerOutcome, GameLoopService};
pub use progress_service::ProgressService;

use std::sync::Arc;

use kids_core::model::{AppState, GameKind, GameProgress};
use kids_core::tasks::Round;
use rand::Rng;
use tracing::debug;

use crate::error::GameError;
use crate::progress_service::ProgressService;

/// Result of tapping a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Progress was recorded and saved; the caller should start a new round.
    Correct {
        game: GameKind,
        praise: &'static str,
        progress: GameProgress,
    },
    /// Nothing changed; the same round stays active.
    TryAgain,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// Orchestrates round generation and persisted answering.
#[derive(Clone)]
pub struct GameLoopService {
    progress: Arc<ProgressService>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(progress: Arc<ProgressService>) -> Self {
        Self { progress }
    }

    /// Generate a new round for `game`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlayable` for the prep game, which only launches
    /// the other games.
    pub fn new_round<R: Rng + ?Sized>(&self, game: GameKind, rng: &mut R) -> Result<Round, GameError> {
        Round::generate(game, rng).ok_or(GameError::NotPlayable(game))
    }

    /// Apply a tap to `state` without persisting it.
    ///
    /// A correct choice records one star and one completion. Callers that
    /// hold the state in a shared cell use this synchronously and then save
    /// through `ProgressService::save_latest`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ChoiceOutOfRange` for a bad index.
    pub fn apply_answer(
        &self,
        state: &mut AppState,
        round: &Round,
        index: usize,
    ) -> Result<AnswerOutcome, GameError> {
        let correct = round.check(index).ok_or(GameError::ChoiceOutOfRange {
            index,
            len: round.choice_count(),
        })?;

        let game = round.game();
        if !correct {
            debug!(%game, index, "wrong answer");
            return Ok(AnswerOutcome::TryAgain);
        }

        state.record_correct(game);
        let progress = state.progress.game(game);
        debug!(%game, stars = progress.stars, done = progress.done, "correct answer");
        Ok(AnswerOutcome::Correct {
            game,
            praise: game.praise(),
            progress,
        })
    }

    /// Answer `round` with the choice at `index`, saving a correct answer.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ChoiceOutOfRange` for a bad index, or
    /// `GameError::Progress` if a correct answer could not be saved.
    pub async fn answer(
        &self,
        state: &mut AppState,
        round: &Round,
        index: usize,
    ) -> Result<AnswerOutcome, GameError> {
        let outcome = self.apply_answer(state, round, index)?;
        if outcome.is_correct() {
            self.progress.save(state).await?;
        }
        Ok(outcome)
    }
}

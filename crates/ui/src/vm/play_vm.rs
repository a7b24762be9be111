use kids_core::model::{AppState, GameKind};
use kids_core::tasks::Round;
use rand::Rng;
use services::{AnswerOutcome, GameError, GameLoopService};

/// The live round on a game screen.
///
/// `dealt` counts rounds handed out so views can react to a new round even
/// when its prompt text matches the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayRoundVm {
    game: GameKind,
    round: Option<Round>,
    dealt: u64,
}

impl PlayRoundVm {
    pub fn deal<R: Rng + ?Sized>(game_loop: &GameLoopService, game: GameKind, rng: &mut R) -> Self {
        Self {
            game,
            round: game_loop.new_round(game, rng).ok(),
            dealt: 1,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn dealt(&self) -> u64 {
        self.dealt
    }

    /// Replace the round. Progress is not touched.
    pub fn skip<R: Rng + ?Sized>(&mut self, game_loop: &GameLoopService, rng: &mut R) {
        self.round = game_loop.new_round(self.game, rng).ok();
        self.dealt = self.dealt.wrapping_add(1);
    }

    /// Apply a tap to `state`. A correct tap deals the next round right away,
    /// so a second tap always lands on the new round.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlayable` when there is no round, or
    /// `GameError::ChoiceOutOfRange` for a bad index.
    pub fn tap<R: Rng + ?Sized>(
        &mut self,
        game_loop: &GameLoopService,
        state: &mut AppState,
        index: usize,
        rng: &mut R,
    ) -> Result<AnswerOutcome, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NotPlayable(self.game))?;
        let outcome = game_loop.apply_answer(state, round, index)?;
        if outcome.is_correct() {
            self.skip(game_loop, rng);
        }
        Ok(outcome)
    }
}

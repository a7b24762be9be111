//! Randomized multiple-choice rounds for the mini-games.
//!
//! Every generator is a pure function of the `Rng` it is handed, so a seeded
//! `StdRng` reproduces the same round.

mod choices;
mod colors;
mod counting;
mod letters;
mod round;

use rand::Rng;

use crate::model::GameKind;

pub use choices::{CHOICE_COUNT, ChoiceSet};
pub use colors::{ColoredShape, ColorsTask};
pub use counting::CountingTask;
pub use letters::LettersTask;
pub use round::Round;

/// One round of a mini-game: a spoken prompt and a set of choices.
pub trait Task {
    type Choice: Clone + PartialEq;

    const GAME: GameKind;

    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        Self: Sized;

    fn prompt(&self) -> String;

    fn choice_set(&self) -> &ChoiceSet<Self::Choice>;
}

/// Uniform index in `0..len`, different from `not` whenever `len > 1`.
fn pick_different<R: Rng + ?Sized>(rng: &mut R, len: usize, not: usize) -> usize {
    let mut idx = rng.random_range(0..len);
    if len <= 1 {
        return idx;
    }
    while idx == not {
        idx = rng.random_range(0..len);
    }
    idx
}

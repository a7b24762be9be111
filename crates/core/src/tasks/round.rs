use rand::Rng;

use super::{ColorsTask, CountingTask, LettersTask, Task};
use crate::model::GameKind;

/// A generated task tagged with the game it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Round {
    Colors(ColorsTask),
    Counting(CountingTask),
    Letters(LettersTask),
}

impl Round {
    /// Generate a fresh round for `game`. The prep game has no rounds of its own.
    pub fn generate<R: Rng + ?Sized>(game: GameKind, rng: &mut R) -> Option<Self> {
        match game {
            GameKind::Colors => Some(Self::Colors(ColorsTask::generate(rng))),
            GameKind::Counting => Some(Self::Counting(CountingTask::generate(rng))),
            GameKind::Letters => Some(Self::Letters(LettersTask::generate(rng))),
            GameKind::Prep => None,
        }
    }

    #[must_use]
    pub fn game(&self) -> GameKind {
        match self {
            Self::Colors(_) => ColorsTask::GAME,
            Self::Counting(_) => CountingTask::GAME,
            Self::Letters(_) => LettersTask::GAME,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::Colors(task) => task.prompt(),
            Self::Counting(task) => task.prompt(),
            Self::Letters(task) => task.prompt(),
        }
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        match self {
            Self::Colors(task) => task.choice_set().choices().len(),
            Self::Counting(task) => task.choice_set().choices().len(),
            Self::Letters(task) => task.choice_set().choices().len(),
        }
    }

    /// Whether the choice at `index` is the answer; `None` when out of range.
    #[must_use]
    pub fn check(&self, index: usize) -> Option<bool> {
        match self {
            Self::Colors(task) => check(task, index),
            Self::Counting(task) => check(task, index),
            Self::Letters(task) => check(task, index),
        }
    }

    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        match self {
            Self::Colors(task) => task.choice_set().correct_index(),
            Self::Counting(task) => task.choice_set().correct_index(),
            Self::Letters(task) => task.choice_set().correct_index(),
        }
    }
}

fn check<T: Task>(task: &T, index: usize) -> Option<bool> {
    let set = task.choice_set();
    set.get(index).map(|choice| set.is_correct(choice))
}

use rand::Rng;

use super::{CHOICE_COUNT, ChoiceSet, Task};
use crate::model::{GameKind, LETTERS};

/// "Find the letter K" among four distinct capitals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LettersTask {
    choices: ChoiceSet<char>,
}

impl LettersTask {
    #[must_use]
    pub fn target(&self) -> char {
        *self.choices.answer()
    }
}

impl Task for LettersTask {
    type Choice = char;

    const GAME: GameKind = GameKind::Letters;

    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let target = LETTERS[rng.random_range(0..LETTERS.len())];

        let mut pool = Vec::with_capacity(CHOICE_COUNT);
        pool.push(target);
        while pool.len() < CHOICE_COUNT {
            let letter = LETTERS[rng.random_range(0..LETTERS.len())];
            if !pool.contains(&letter) {
                pool.push(letter);
            }
        }

        Self {
            choices: ChoiceSet::shuffled(target, pool, rng),
        }
    }

    fn prompt(&self) -> String {
        format!("Find the letter {}.", self.target())
    }

    fn choice_set(&self) -> &ChoiceSet<char> {
        &self.choices
    }
}

use rand::Rng;
use rand::seq::SliceRandom;

use super::{CHOICE_COUNT, ChoiceSet, Task};
use crate::model::{COUNT_MAX, COUNT_MIN, COUNT_PICTURES, GameKind};

const _: () = assert!((COUNT_MAX - COUNT_MIN + 1) as usize >= CHOICE_COUNT);

/// "How many do you see?": a row of identical pictures and four numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingTask {
    picture: &'static str,
    choices: ChoiceSet<u8>,
}

impl CountingTask {
    #[must_use]
    pub fn count(&self) -> u8 {
        *self.choices.answer()
    }

    #[must_use]
    pub fn picture(&self) -> &'static str {
        self.picture
    }
}

impl Task for CountingTask {
    type Choice = u8;

    const GAME: GameKind = GameKind::Counting;

    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.random_range(COUNT_MIN..=COUNT_MAX);
        let picture = COUNT_PICTURES[rng.random_range(0..COUNT_PICTURES.len())];

        // Neighbours make the best distractors; the random draw adds variety.
        let seeds = [
            count,
            count.saturating_sub(1).clamp(COUNT_MIN, COUNT_MAX),
            count.saturating_add(1).clamp(COUNT_MIN, COUNT_MAX),
            rng.random_range(COUNT_MIN..=COUNT_MAX),
        ];
        let mut candidates: Vec<u8> = Vec::with_capacity(CHOICE_COUNT);
        for n in seeds {
            if !candidates.contains(&n) {
                candidates.push(n);
            }
        }
        candidates.shuffle(rng);
        candidates.truncate(CHOICE_COUNT);

        while candidates.len() < CHOICE_COUNT {
            let n = rng.random_range(COUNT_MIN..=COUNT_MAX);
            if !candidates.contains(&n) {
                candidates.push(n);
            }
        }

        Self {
            picture,
            choices: ChoiceSet::shuffled(count, candidates, rng),
        }
    }

    fn prompt(&self) -> String {
        "How many do you see?".to_string()
    }

    fn choice_set(&self) -> &ChoiceSet<u8> {
        &self.choices
    }
}

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of choices offered in every round.
pub const CHOICE_COUNT: usize = 4;

/// Shuffled choices with exactly one correct entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet<T> {
    answer: T,
    choices: Vec<T>,
}

impl<T: Clone + PartialEq> ChoiceSet<T> {
    /// Shuffle `choices` into presentation order.
    ///
    /// Callers guarantee `choices` holds `CHOICE_COUNT` unique values, one of
    /// which is `answer`.
    pub(crate) fn shuffled<R: Rng + ?Sized>(answer: T, mut choices: Vec<T>, rng: &mut R) -> Self {
        choices.shuffle(rng);
        let set = Self { answer, choices };
        debug_assert!(set.is_well_formed());
        set
    }

    #[must_use]
    pub fn answer(&self) -> &T {
        &self.answer
    }

    #[must_use]
    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.choices.get(index)
    }

    #[must_use]
    pub fn is_correct(&self, choice: &T) -> bool {
        *choice == self.answer
    }

    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.choices.iter().position(|choice| self.is_correct(choice))
    }

    /// True when there are `CHOICE_COUNT` unique choices and exactly one is correct.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let correct = self.choices.iter().filter(|c| self.is_correct(c)).count();
        let unique = self
            .choices
            .iter()
            .enumerate()
            .all(|(i, c)| !self.choices[..i].contains(c));
        self.choices.len() == CHOICE_COUNT && correct == 1 && unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffled_keeps_every_choice() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = ChoiceSet::shuffled(2_u8, vec![1, 2, 3, 4], &mut rng);
        let mut sorted = set.choices().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        assert_eq!(set.get(set.correct_index().unwrap()), Some(&2));
        assert!(set.is_correct(&2));
        assert!(!set.is_correct(&3));
    }

    #[test]
    fn well_formed_rejects_duplicates_and_wrong_size() {
        let dup = ChoiceSet {
            answer: 1_u8,
            choices: vec![1, 2, 2, 3],
        };
        assert!(!dup.is_well_formed());

        let short = ChoiceSet {
            answer: 1_u8,
            choices: vec![1, 2, 3],
        };
        assert!(!short.is_well_formed());

        let missing = ChoiceSet {
            answer: 9_u8,
            choices: vec![1, 2, 3, 4],
        };
        assert!(!missing.is_well_formed());
        assert_eq!(missing.correct_index(), None);
    }
}

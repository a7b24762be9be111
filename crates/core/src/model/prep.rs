use crate::model::GameKind;

/// One step of the guided kindergarten-prep sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Game launched when the step is started.
    pub game: GameKind,
}

impl PrepStep {
    /// Text shown (and spoken) as the prep screen heading.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Kindergarten Prep: {}.", self.title)
    }
}

pub const PREP_STEPS: [PrepStep; 3] = [
    PrepStep {
        title: "Colors",
        description: "Tap the Colors & Shapes game. Find the color I ask for.",
        game: GameKind::Colors,
    },
    PrepStep {
        title: "Counting",
        description: "Tap the Counting game. Count up to 5.",
        game: GameKind::Counting,
    },
    PrepStep {
        title: "Letters",
        description: "Tap the Letters game. Find the letter I ask for.",
        game: GameKind::Letters,
    },
];

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown game: {0}")]
pub struct UnknownGame(pub String);

/// The four mini-games offered on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Colors,
    Counting,
    Letters,
    Prep,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Colors,
        GameKind::Counting,
        GameKind::Letters,
        GameKind::Prep,
    ];

    /// Key used for this game inside the persisted progress document.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            GameKind::Colors => "colors",
            GameKind::Counting => "counting",
            GameKind::Letters => "letters",
            GameKind::Prep => "prep",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Colors => "Colors & Shapes",
            GameKind::Counting => "Counting",
            GameKind::Letters => "Letters",
            GameKind::Prep => "Kindergarten Prep",
        }
    }

    /// Short cheer spoken after a correct answer.
    #[must_use]
    pub fn praise(self) -> &'static str {
        match self {
            GameKind::Colors | GameKind::Prep => "Great job!",
            GameKind::Counting => "Yes!",
            GameKind::Letters => "Nice!",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GameKind {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|game| game.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGame(s.to_string()))
    }
}

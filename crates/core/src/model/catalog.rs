//! Fixed content shown by the mini-games.

use std::fmt;

/// A named swatch used by the colors game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub name: &'static str,
    pub hex: &'static str,
}

pub const COLORS: [Color; 6] = [
    Color { name: "red", hex: "#ff4d6d" },
    Color { name: "blue", hex: "#4dabff" },
    Color { name: "yellow", hex: "#ffd24d" },
    Color { name: "green", hex: "#2de2a6" },
    Color { name: "purple", hex: "#b07cff" },
    Color { name: "orange", hex: "#ff9f43" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Star,
}

impl Shape {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Star => "star",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const SHAPES: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Star];

/// Pictures repeated on the counting board, for visual variety.
pub const COUNT_PICTURES: [&str; 8] = ["🍎", "⭐", "🐟", "🍪", "🧸", "🟦", "🚗", "🌼"];

/// Smallest count asked for (ages 3-5).
pub const COUNT_MIN: u8 = 1;
/// Largest count asked for (ages 3-5).
pub const COUNT_MAX: u8 = 5;

pub const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

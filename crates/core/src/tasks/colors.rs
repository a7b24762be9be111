use rand::Rng;

use super::{ChoiceSet, Task, pick_different};
use crate::model::{COLORS, Color, GameKind, SHAPES, Shape};

/// A shape drawn in a color; the unit the colors game asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredShape {
    pub color: Color,
    pub shape: Shape,
}

impl ColoredShape {
    /// Accessible label, e.g. `red circle`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.color.name, self.shape)
    }
}

/// "Tap the red circle": the target plus three look-alikes.
///
/// One distractor keeps the shape and changes the color, one keeps the color
/// and changes the shape, and one changes both. None of them matches the
/// target on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorsTask {
    choices: ChoiceSet<ColoredShape>,
}

impl ColorsTask {
    #[must_use]
    pub fn target(&self) -> ColoredShape {
        *self.choices.answer()
    }
}

impl Task for ColorsTask {
    type Choice = ColoredShape;

    const GAME: GameKind = GameKind::Colors;

    fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color_idx = rng.random_range(0..COLORS.len());
        let shape_idx = rng.random_range(0..SHAPES.len());
        let other_color = COLORS[pick_different(rng, COLORS.len(), color_idx)];
        let other_shape = SHAPES[pick_different(rng, SHAPES.len(), shape_idx)];

        let target = ColoredShape {
            color: COLORS[color_idx],
            shape: SHAPES[shape_idx],
        };
        let choices = vec![
            target,
            ColoredShape {
                color: other_color,
                shape: target.shape,
            },
            ColoredShape {
                color: target.color,
                shape: other_shape,
            },
            ColoredShape {
                color: other_color,
                shape: other_shape,
            },
        ];

        Self {
            choices: ChoiceSet::shuffled(target, choices, rng),
        }
    }

    fn prompt(&self) -> String {
        format!("Tap the {}.", self.target().label())
    }

    fn choice_set(&self) -> &ChoiceSet<ColoredShape> {
        &self.choices
    }
}

use kids_core::model::Shape;
use kids_core::tasks::{Round, Task};

/// What a choice button shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceFace {
    Shape {
        shape: Shape,
        color_hex: &'static str,
    },
    Number(u8),
    Letter(char),
}

impl ChoiceFace {
    /// Inline style for shape faces. Triangles and stars are drawn with CSS
    /// borders, so they take the color on the border instead of the fill.
    #[must_use]
    pub fn shape_style(&self) -> Option<String> {
        match self {
            ChoiceFace::Shape {
                shape: Shape::Triangle | Shape::Star,
                color_hex,
            } => Some(format!("border-bottom-color: {color_hex}; color: {color_hex};")),
            ChoiceFace::Shape { color_hex, .. } => Some(format!("background: {color_hex};")),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub face: ChoiceFace,
}

#[must_use]
pub fn map_choices(round: &Round) -> Vec<ChoiceVm> {
    match round {
        Round::Colors(task) => task
            .choice_set()
            .choices()
            .iter()
            .enumerate()
            .map(|(index, choice)| ChoiceVm {
                index,
                label: choice.label(),
                face: ChoiceFace::Shape {
                    shape: choice.shape,
                    color_hex: choice.color.hex,
                },
            })
            .collect(),
        Round::Counting(task) => task
            .choice_set()
            .choices()
            .iter()
            .enumerate()
            .map(|(index, n)| ChoiceVm {
                index,
                label: n.to_string(),
                face: ChoiceFace::Number(*n),
            })
            .collect(),
        Round::Letters(task) => task
            .choice_set()
            .choices()
            .iter()
            .enumerate()
            .map(|(index, letter)| ChoiceVm {
                index,
                label: letter.to_string(),
                face: ChoiceFace::Letter(*letter),
            })
            .collect(),
    }
}

/// Pictures to count, one entry per item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountingBoardVm {
    pub items: Vec<&'static str>,
}

#[must_use]
pub fn map_counting_board(round: &Round) -> Option<CountingBoardVm> {
    match round {
        Round::Counting(task) => Some(CountingBoardVm {
            items: vec![task.picture(); usize::from(task.count())],
        }),
        _ => None,
    }
}

use dioxus::prelude::*;
use kids_core::model::{AppState, GameKind};
use kids_core::tasks::Round;
use services::AnswerOutcome;
use tracing::warn;

use crate::context::AppContext;
use crate::views::{HomeButton, StarBar, persist, say, show_toast};
use crate::vm::{ChoiceFace, ChoiceVm, PlayRoundVm, ToastVm, map_choices, map_counting_board};

#[component]
pub fn ColorsView() -> Element {
    rsx! { PlayView { game: GameKind::Colors } }
}

#[component]
pub fn CountingView() -> Element {
    rsx! { PlayView { game: GameKind::Counting } }
}

#[component]
pub fn LettersView() -> Element {
    rsx! { PlayView { game: GameKind::Letters } }
}

/// One playable game: prompt, choices, stars and navigation.
///
/// A correct tap records progress and deals a fresh round in the same
/// handler, then saves in the background. A wrong tap keeps the round so the
/// child can try again.
#[component]
pub fn PlayView(game: GameKind) -> Element {
    let ctx = use_context::<AppContext>();
    let app_state = use_context::<Signal<AppState>>();
    let toast = use_context::<Signal<ToastVm>>();

    let game_loop = ctx.game_loop();
    let mut play = use_signal({
        let game_loop = game_loop.clone();
        move || PlayRoundVm::deal(&game_loop, game, &mut rand::rng())
    });

    // Speak each newly dealt prompt, even when its text repeats.
    let dealt = use_memo(move || play.read().dealt());
    let feedback = ctx.feedback();
    use_effect(move || {
        dealt();
        if let Some(current) = play.peek().round() {
            say(&feedback, &app_state.peek(), toast, &current.prompt());
        }
    });

    let answer = use_callback({
        let game_loop = game_loop.clone();
        let feedback = ctx.feedback();
        let progress = ctx.progress();
        move |index: usize| {
            let mut app_state = app_state;
            let result = {
                let mut state = app_state.write();
                play.write().tap(&game_loop, &mut state, index, &mut rand::rng())
            };
            match result {
                Ok(AnswerOutcome::Correct { praise, .. }) => {
                    feedback.beep(true);
                    show_toast(toast, praise);
                    persist(progress.clone(), app_state, toast);
                }
                Ok(AnswerOutcome::TryAgain) => {
                    feedback.beep(false);
                    show_toast(toast, "Try again");
                    say(&feedback, &app_state.peek(), toast, "Try again");
                }
                Err(err) => warn!(error = %err, %game, "tap ignored"),
            }
        }
    });

    let next_round = use_callback(move |()| {
        play.write().skip(&game_loop, &mut rand::rng());
    });

    let title = game.title();
    let stars = app_state().progress.game(game).stars;
    let Some(current) = play.read().round().cloned() else {
        return rsx! {
            div { class: "page play",
                h2 { "{title}" }
                p { "This game has no rounds." }
                HomeButton {}
            }
        };
    };
    let prompt = current.prompt();
    let choices = map_choices(&current);
    let board = map_counting_board(&current);
    let grid_class = if matches!(current, Round::Colors(_)) {
        "choices choices--shapes"
    } else {
        "choices"
    };

    rsx! {
        div { class: "page play",
            h2 { class: "game-title", "{title}" }
            p { class: "prompt", "{prompt}" }

            if let Some(board) = board {
                div { class: "counting-items", aria_hidden: "true",
                    for (i, item) in board.items.into_iter().enumerate() {
                        span { key: "{i}", class: "item", "{item}" }
                    }
                }
            }

            div { class: "{grid_class}",
                for choice in choices {
                    ChoiceButton { key: "{choice.index}", choice, on_pick: answer }
                }
            }

            StarBar { stars }

            div { class: "controls",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| next_round.call(()),
                    "Next"
                }
                HomeButton {}
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_pick: Callback<usize>) -> Element {
    let index = choice.index;
    match &choice.face {
        ChoiceFace::Shape { shape, .. } => {
            let class = format!("shape shape--{}", shape.name());
            let style = choice.face.shape_style().unwrap_or_default();
            rsx! {
                button {
                    class: "big-choice",
                    r#type: "button",
                    aria_label: "{choice.label}",
                    onclick: move |_| on_pick.call(index),
                    div { class: "{class}", style: "{style}" }
                }
            }
        }
        ChoiceFace::Number(_) | ChoiceFace::Letter(_) => rsx! {
            button {
                class: "choice-btn",
                r#type: "button",
                aria_label: "{choice.label}",
                onclick: move |_| on_pick.call(index),
                "{choice.label}"
            }
        },
    }
}

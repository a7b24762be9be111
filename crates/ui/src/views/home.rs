use dioxus::prelude::*;
use dioxus_router::Link;
use kids_core::model::AppState;
use services::SpeakOutcome;

use crate::audio::VOICE_ERROR_ID;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{persist, say, show_toast};
use crate::vm::{ToastVm, map_home_cards, voice_button_label, voice_hint};

const TEST_PHRASE: &str = "Hello! Voice is working.";

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut app_state = use_context::<Signal<AppState>>();
    let toast = use_context::<Signal<ToastVm>>();
    let mut confirm_reset = use_signal(|| false);

    let state = app_state();
    let cards = map_home_cards(&state);
    let voice_label = voice_button_label(state.voice_on);
    let hint = voice_hint(&ctx.feedback().status());

    let progress = ctx.progress();
    let feedback = ctx.feedback();
    let toggle_voice = use_callback(move |()| {
        let voice_on = app_state.write().toggle_voice();
        persist(progress.clone(), app_state, toast);
        if voice_on {
            show_toast(toast, "Voice on");
            say(&feedback, &app_state.peek(), toast, "Voice on");
        } else {
            show_toast(toast, "Voice off");
        }
    });

    let progress = ctx.progress();
    let feedback = ctx.feedback();
    let reset = use_callback(move |()| {
        confirm_reset.set(false);
        app_state.write().reset();
        persist(progress.clone(), app_state, toast);
        show_toast(toast, "Reset!");
        say(&feedback, &app_state.peek(), toast, "Reset");
    });

    let feedback = ctx.feedback();
    let test_voice = use_callback(move |()| {
        let message = match feedback.speak_forced(TEST_PHRASE) {
            SpeakOutcome::Unsupported => "Voice not supported",
            SpeakOutcome::Failed => "Voice failed",
            _ => "Testing voice...",
        };
        show_toast(toast, message);
    });

    rsx! {
        div { class: "page home",
            h1 { "Kids Learning" }

            div { class: "game-grid",
                for card in cards {
                    Link {
                        key: "{card.game}",
                        to: Route::for_game(card.game),
                        class: "game-card",
                        h3 { "{card.title}" }
                        p { class: "meta", "{card.meta}" }
                    }
                }
            }

            div { class: "controls",
                button {
                    class: "btn",
                    r#type: "button",
                    aria_pressed: "{state.voice_on}",
                    onclick: move |_| toggle_voice.call(()),
                    "{voice_label}"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| test_voice.call(()),
                    "Test Voice"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| confirm_reset.set(true),
                    "Reset"
                }
            }

            if confirm_reset() {
                div { class: "confirm", role: "alertdialog",
                    p { "Reset stars and progress on this device?" }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| reset.call(()),
                        "Yes, reset"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| confirm_reset.set(false),
                        "Cancel"
                    }
                }
            }

            p { class: "voice-hint", "{hint}" }
            span { id: VOICE_ERROR_ID, class: "voice-error" }
        }
    }
}

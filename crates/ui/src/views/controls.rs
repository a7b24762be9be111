use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use kids_core::model::AppState;
use services::{FeedbackService, ProgressService, SpeakOutcome};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{SAVE_FAILED, show_toast};
use crate::vm::{ToastVm, star_bar};

/// Speak `text`, surfacing a blocked voice as a toast.
pub fn say(feedback: &FeedbackService, state: &AppState, toast: Signal<ToastVm>, text: &str) {
    if feedback.speak(state, text) == SpeakOutcome::Failed {
        show_toast(toast, "Voice blocked or unavailable");
    }
}

/// Save the current contents of `app_state`.
///
/// Views change the signal synchronously and then call this. Saves run in
/// order and each one writes the newest state, so a burst of taps cannot
/// leave an older snapshot in storage.
pub fn persist(progress: Arc<ProgressService>, app_state: Signal<AppState>, toast: Signal<ToastVm>) {
    let _ = spawn_forever(async move {
        if let Err(err) = progress.save_latest(|| *app_state.peek()).await {
            warn!(error = %err, "progress not saved");
            show_toast(toast, SAVE_FAILED);
        }
    });
}

#[component]
pub fn HomeButton() -> Element {
    let ctx = use_context::<AppContext>();
    let app_state = use_context::<Signal<AppState>>();
    let toast = use_context::<Signal<ToastVm>>();
    let navigator = use_navigator();

    rsx! {
        button {
            class: "btn btn-secondary",
            r#type: "button",
            onclick: move |_| {
                say(&ctx.feedback(), &app_state.peek(), toast, "Home");
                let _ = navigator.push(Route::Home {});
            },
            "Home"
        }
    }
}

#[component]
pub fn StarBar(stars: u32) -> Element {
    let label = star_bar(stars);
    rsx! {
        p { class: "stars", "{label}" }
    }
}

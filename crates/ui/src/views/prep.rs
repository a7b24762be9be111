use dioxus::prelude::*;
use dioxus_router::use_navigator;
use kids_core::model::AppState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{HomeButton, StarBar, persist, say};
use crate::vm::ToastVm;

#[component]
pub fn PrepView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut app_state = use_context::<Signal<AppState>>();
    let toast = use_context::<Signal<ToastVm>>();
    let navigator = use_navigator();

    // Clamp a stale step index and write it back once on entry.
    let progress = ctx.progress();
    use_hook(move || {
        spawn(async move {
            app_state.write().prep_step();
            persist(progress, app_state, toast);
        });
    });

    let step_index = use_memo(move || app_state().progress.prep.step_index);
    let feedback = ctx.feedback();
    use_effect(move || {
        step_index();
        let mut snapshot = *app_state.peek();
        let step = snapshot.prep_step();
        say(
            &feedback,
            &snapshot,
            toast,
            &format!("{} {}", step.prompt(), step.description),
        );
    });

    let progress = ctx.progress();
    let start = use_callback(move |()| {
        let step = app_state.write().start_prep_step();
        persist(progress.clone(), app_state, toast);
        let _ = navigator.push(Route::for_game(step.game));
    });

    let progress = ctx.progress();
    let next = use_callback(move |()| {
        app_state.write().advance_prep();
        persist(progress.clone(), app_state, toast);
    });

    let mut snapshot = app_state();
    let step = snapshot.prep_step();
    let prompt = step.prompt();
    let stars = snapshot.progress.prep.tally.stars;

    rsx! {
        div { class: "page prep",
            h2 { class: "game-title", "Kindergarten Prep" }
            p { class: "prompt", "{prompt}" }
            p { class: "prep-description", "{step.description}" }

            StarBar { stars }

            div { class: "controls",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| start.call(()),
                    "Start"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| next.call(()),
                    "Next"
                }
                HomeButton {}
            }
        }
    }
}

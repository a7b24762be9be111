use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use kids_core::model::GameKind;

use crate::audio::load_voices;
use crate::context::AppContext;
use crate::views::{ColorsView, CountingView, HomeView, LettersView, PrepView, Toast};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/colors", ColorsView)] Colors {},
        #[route("/counting", CountingView)] Counting {},
        #[route("/letters", LettersView)] Letters {},
        #[route("/prep", PrepView)] Prep {},
}

impl Route {
    #[must_use]
    pub fn for_game(game: GameKind) -> Self {
        match game {
            GameKind::Colors => Route::Colors {},
            GameKind::Counting => Route::Counting {},
            GameKind::Letters => Route::Letters {},
            GameKind::Prep => Route::Prep {},
        }
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let mut unlocked = use_signal(|| false);

    rsx! {
        div {
            class: "app",
            // Webviews only allow speech after a user gesture.
            onpointerdown: move |_| {
                if unlocked() {
                    return;
                }
                unlocked.set(true);
                let feedback = ctx.feedback();
                if feedback.unlock() {
                    spawn(async move {
                        let voices = load_voices().await;
                        feedback.set_voices(voices);
                    });
                }
            },
            main { class: "content",
                Outlet::<Route> {}
            }
            Toast {}
        }
    }
}

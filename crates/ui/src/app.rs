use dioxus::prelude::*;
use dioxus_router::Router;
use kids_core::model::AppState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::ToastVm;

/// Provide the shared signals every view reads: the owned `AppState` and the toast.
pub fn use_app_signals() -> (Signal<AppState>, Signal<ToastVm>) {
    let ctx = use_context::<AppContext>();
    let state = use_context_provider(|| Signal::new(ctx.initial_state()));
    let toast = use_context_provider(|| Signal::new(ToastVm::default()));
    (state, toast)
}

#[component]
pub fn App() -> Element {
    use_app_signals();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Kids Learning" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

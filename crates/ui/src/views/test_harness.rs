use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use kids_core::model::AppState;
use kids_core::time::fixed_now;
use services::{
    AppServices, Clock, FeedbackService, GameLoopService, NullAudio, ProgressService,
};
use storage::repository::Storage;

use crate::app::use_app_signals;
use crate::context::{UiApp, build_app_context};
use crate::views::{ColorsView, CountingView, HomeView, LettersView, PrepView};

struct TestApp {
    initial_state: AppState,
    services: AppServices,
}

impl UiApp for TestApp {
    fn initial_state(&self) -> AppState {
        self.initial_state
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        self.services.game_loop()
    }

    fn feedback(&self) -> Arc<FeedbackService> {
        self.services.feedback()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Colors,
    Counting,
    Letters,
    Prep,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_app_signals();
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Colors => rsx! { ColorsView {} },
        ViewKind::Counting => rsx! { CountingView {} },
        ViewKind::Letters => rsx! { LettersView {} },
        ViewKind::Prep => rsx! { PrepView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub progress: Arc<ProgressService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_state(view, AppState::default())
}

pub fn setup_view_harness_with_state(view: ViewKind, initial_state: AppState) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::from_storage(
        &storage,
        Clock::fixed(fixed_now()),
        Arc::new(NullAudio),
    );
    let progress = services.progress();
    let app = Arc::new(TestApp {
        initial_state,
        services,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        progress,
    }
}

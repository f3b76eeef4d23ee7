use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Mode, QuestionBank};
use quiz_core::sound::SoundSettings;
use quiz_core::time::fixed_clock;
use services::{GameLoopService, RecordsService};
use storage::repository::Storage;

use crate::app::{SelectedMode, SoundState};
use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, PlayView};

#[derive(Clone)]
struct TestApp {
    game_loop: Arc<GameLoopService>,
    records: Arc<RecordsService>,
    initial_mode: Mode,
}

impl UiApp for TestApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    fn records(&self) -> Arc<RecordsService> {
        Arc::clone(&self.records)
    }

    fn initial_mode(&self) -> Mode {
        self.initial_mode
    }

    fn sound_enabled(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Play(Mode),
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

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let initial_mode = app.initial_mode();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| SelectedMode(Signal::new(initial_mode)));
    use_context_provider(|| SoundState(Signal::new(SoundSettings::new(false))));
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play(mode) => rsx! { PlayView { mode } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
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

    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
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

pub fn setup_view_harness(view: ViewKind, bank: QuestionBank) -> ViewHarness {
    setup_view_harness_with_storage(view, bank, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    bank: QuestionBank,
    storage: Storage,
) -> ViewHarness {
    let game_loop = Arc::new(
        GameLoopService::new(
            fixed_clock(),
            Arc::new(bank),
            Arc::clone(&storage.history),
            Arc::clone(&storage.leaderboards),
            Arc::clone(&storage.high_scores),
        )
        .with_seed(7),
    );
    let records = Arc::new(RecordsService::new(
        Arc::clone(&storage.history),
        Arc::clone(&storage.leaderboards),
        Arc::clone(&storage.high_scores),
    ));
    let initial_mode = match view {
        ViewKind::Home => Mode::Mixed,
        ViewKind::Play(mode) => mode,
    };
    let app = Arc::new(TestApp {
        game_loop,
        records,
        initial_mode,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}

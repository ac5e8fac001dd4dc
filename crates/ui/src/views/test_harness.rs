use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizState;
use services::{ContentProvider, QuizRunner};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizScreen, QuizTestHandles, QuizView};

#[derive(Clone)]
struct TestApp {
    runner: Arc<QuizRunner>,
}

impl UiApp for TestApp {
    fn runner(&self) -> Arc<QuizRunner> {
        Arc::clone(&self.runner)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

#[component]
fn ScreenHarness(state: QuizState) -> Element {
    rsx! { QuizScreen { state, on_event: move |_: quiz_core::QuizEvent| {} } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
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

    pub fn send(&self, event: quiz_core::QuizEvent) {
        self.dom.in_runtime(|| self.handles.send(event));
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

/// Mount the full quiz controller over `provider`.
pub fn setup_view_harness(provider: Arc<dyn ContentProvider>, quiz_length: usize) -> ViewHarness {
    let app = Arc::new(TestApp {
        runner: Arc::new(QuizRunner::new(provider, quiz_length)),
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

/// Render the screen for a fixed state.
pub fn render_screen(state: QuizState) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { state });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

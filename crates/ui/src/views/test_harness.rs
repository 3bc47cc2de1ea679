use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::stream;
use lesson_core::{LessonMachine, UserContext};
use services::{
    FragmentStream, GenerationError, GenerationRequest, LessonContentService, TextGenerator,
};

use crate::app::{LessonActions, LessonPhaseView, LessonScreen, use_lesson_actions};
use crate::context::{UiApp, build_app_context};

pub type FragmentSender = mpsc::UnboundedSender<Result<String, GenerationError>>;

/// Generator that serves one scripted stream, then reports itself disabled.
pub struct ScriptedGenerator {
    script: Mutex<Option<FragmentStream>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    fn with_script(script: Option<FragmentStream>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn new(fragments: &[&str]) -> Arc<Self> {
        let items: Vec<Result<String, GenerationError>> =
            fragments.iter().map(|text| Ok((*text).to_string())).collect();
        Self::with_script(Some(Box::pin(stream::iter(items))))
    }

    pub fn failing() -> Arc<Self> {
        Self::with_script(None)
    }

    /// Fragments are pushed by the test; dropping the sender ends the stream.
    pub fn channel() -> (Arc<Self>, FragmentSender) {
        let (tx, rx) = mpsc::unbounded();
        (Self::with_script(Some(Box::pin(rx))), tx)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for ScriptedGenerator {
    fn provider(&self) -> &str {
        "scripted"
    }

    async fn stream(&self, request: GenerationRequest) -> Result<FragmentStream, GenerationError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .take()
            .ok_or(GenerationError::Disabled)
    }
}

struct TestApp {
    lesson_content: Arc<LessonContentService>,
}

impl UiApp for TestApp {
    fn lesson_content(&self) -> Arc<LessonContentService> {
        Arc::clone(&self.lesson_content)
    }
}

fn test_app(generator: Arc<ScriptedGenerator>) -> Arc<dyn UiApp> {
    Arc::new(TestApp {
        lesson_content: Arc::new(LessonContentService::new(generator)),
    })
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<dyn UiApp>,
    machine: LessonMachine,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    let machine = use_signal(|| props.machine.clone());

    rsx! { LessonScreen { machine } }
}

/// Handles registered by the flow harness on first render.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    actions: Rc<RefCell<Option<LessonActions>>>,
}

impl HarnessHandles {
    pub fn actions(&self) -> LessonActions {
        self.actions.borrow().clone().expect("actions registered")
    }
}

#[derive(Props, Clone)]
struct FlowHarnessProps {
    app: Arc<dyn UiApp>,
    handles: HarnessHandles,
}

impl PartialEq for FlowHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for FlowHarnessProps {}

#[component]
fn FlowHarness(props: FlowHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    let machine = use_signal(LessonMachine::new);
    let actions = use_lesson_actions(machine);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.actions.borrow_mut() = Some(actions);
    }

    rsx! {
        LessonPhaseView {
            machine,
            on_submit: actions.on_submit,
            on_restart: actions.on_restart,
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
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

    /// Drive until the rendered markup contains `needle`, or give up after a
    /// bounded number of rounds.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..20 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
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

/// Render `LessonScreen` over a machine in any phase.
pub fn setup_screen_harness(machine: LessonMachine) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ScreenHarness,
        ScreenHarnessProps {
            app: test_app(ScriptedGenerator::new(&[])),
            machine,
        },
    );
    ViewHarness { dom }
}

/// Render the lesson screen from `Onboarding` with its handlers exposed, so a
/// test can submit exactly as the form does.
pub fn setup_flow_harness(generator: Arc<ScriptedGenerator>) -> (ViewHarness, HarnessHandles) {
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        FlowHarness,
        FlowHarnessProps {
            app: test_app(generator),
            handles: handles.clone(),
        },
    );
    (ViewHarness { dom }, handles)
}

pub fn generating_machine(fragments: &[&str]) -> LessonMachine {
    let mut machine = LessonMachine::new();
    let ticket = machine
        .submit(UserContext::default())
        .expect("submit from onboarding");
    for fragment in fragments {
        machine.append(&ticket, fragment);
    }
    machine
}

pub fn reading_machine(fragments: &[&str]) -> LessonMachine {
    let mut machine = LessonMachine::new();
    let ticket = machine
        .submit(UserContext::default())
        .expect("submit from onboarding");
    for fragment in fragments {
        machine.append(&ticket, fragment);
    }
    machine.finish(&ticket);
    machine
}

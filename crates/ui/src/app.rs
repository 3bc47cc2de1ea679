use dioxus::prelude::*;
use lesson_core::{LessonMachine, LessonPhase, UserContext};
use services::{LessonState, submit_lesson};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::views::{OnboardingView, ReaderView};

/// Lesson machine held in a Dioxus signal.
///
/// Each `update` takes a short write borrow, so the reader re-renders after
/// every fragment and a restart can land while a stream is suspended.
#[derive(Clone, Copy)]
pub struct LessonSignal(Signal<LessonMachine>);

impl LessonSignal {
    #[must_use]
    pub fn new(machine: Signal<LessonMachine>) -> Self {
        Self(machine)
    }
}

impl LessonState for LessonSignal {
    fn update<R>(&mut self, f: impl FnOnce(&mut LessonMachine) -> R) -> R {
        f(&mut self.0.write())
    }
}

#[component]
pub fn App() -> Element {
    // The only lesson state in the process; owned here and passed down.
    let machine = use_signal(LessonMachine::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "QuantMind Academy" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                LessonScreen { machine }
            }
        }
    }
}

/// Submit and restart handlers for a lesson machine.
#[derive(Clone, Copy, PartialEq)]
pub struct LessonActions {
    pub on_submit: Callback<UserContext>,
    pub on_restart: Callback<()>,
}

/// Bind the lesson handlers to the calling component.
///
/// The lesson task is spawned in this scope, not in the onboarding form's, so
/// it keeps running after the form unmounts on entering `Generating`.
pub fn use_lesson_actions(machine: Signal<LessonMachine>) -> LessonActions {
    let ctx = use_context::<AppContext>();

    let on_submit = use_callback(move |context: UserContext| {
        let content = ctx.lesson_content();
        spawn(async move {
            match submit_lesson(LessonSignal::new(machine), &content, context).await {
                Ok(report) => debug!(?report, "lesson settled"),
                Err(err) => warn!(error = %err, "lesson submit rejected"),
            }
        });
    });

    let on_restart = use_callback(move |()| {
        let mut machine = machine;
        machine.write().restart();
    });

    LessonActions {
        on_submit,
        on_restart,
    }
}

#[component]
pub fn LessonScreen(machine: Signal<LessonMachine>) -> Element {
    let LessonActions {
        on_submit,
        on_restart,
    } = use_lesson_actions(machine);

    rsx! {
        LessonPhaseView { machine, on_submit, on_restart }
    }
}

/// Switches between the onboarding form and the reader by phase.
#[component]
pub fn LessonPhaseView(
    machine: Signal<LessonMachine>,
    on_submit: Callback<UserContext>,
    on_restart: Callback<()>,
) -> Element {
    let phase = machine.read().phase();

    match phase {
        LessonPhase::Onboarding => rsx! {
            OnboardingView { on_submit }
        },
        LessonPhase::Generating | LessonPhase::Reading => rsx! {
            ReaderView { machine, on_restart }
        },
    }
}

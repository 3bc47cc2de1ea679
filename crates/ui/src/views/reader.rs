use dioxus::prelude::*;
use lesson_core::{AutoScroll, LessonMachine, LessonPhase};

use crate::vm::{FollowGate, LESSON_TITLE, ReaderVm};

mod scripts;

use scripts::{read_scroll_metrics, scroll_into_view};

const READER_SCROLL_ID: &str = "reader-scroll";
const READER_BOTTOM_ID: &str = "reader-bottom";

/// Follow new text if the reader is still near the bottom.
///
/// The phase is re-read after measuring: a stream that settled in the meantime
/// must not move the viewport.
async fn follow_stream(machine: Signal<LessonMachine>) {
    let Some(metrics) = read_scroll_metrics(READER_SCROLL_ID).await else {
        return;
    };
    let phase = machine.peek().phase();
    if AutoScroll::default().should_follow(phase, metrics) {
        scroll_into_view(READER_BOTTOM_ID).await;
    }
}

#[component]
pub fn ReaderView(machine: Signal<LessonMachine>, on_restart: Callback<()>) -> Element {
    let vm = use_memo(move || ReaderVm::from_machine(&machine.read()));
    let mut gate = use_signal(FollowGate::default);

    use_effect(move || {
        let (phase, fragments) = {
            let machine = machine.read();
            (machine.phase(), machine.buffer().fragment_count())
        };
        if phase != LessonPhase::Generating || fragments == 0 {
            return;
        }
        if !gate.write().request() {
            return;
        }
        spawn(async move {
            loop {
                follow_stream(machine).await;
                if !gate.write().settle() {
                    break;
                }
            }
        });
    });

    let vm = vm.read();

    rsx! {
        div { class: "reader",
            header { class: "reader-header",
                div { class: "reader-title",
                    h2 { "{LESSON_TITLE}" }
                    p { class: "reader-status", "{vm.status_label}" }
                }
                if vm.is_generating {
                    div { class: "streaming-badge", "STREAMING_DATA..." }
                }
                if vm.show_restart {
                    button {
                        class: "restart",
                        r#type: "button",
                        onclick: move |_| on_restart.call(()),
                        "Start Over"
                    }
                }
            }

            main { class: "reader-scroll", id: READER_SCROLL_ID,
                article { class: "lesson",
                    div { class: "lesson-body", dangerous_inner_html: "{vm.html}" }
                    if vm.is_generating {
                        div { class: "lesson-pending",
                            span { class: "pulse-dot" }
                            span { "Processing next token..." }
                        }
                    }
                    div { class: "lesson-bottom", id: READER_BOTTOM_ID }
                }
            }

            if vm.show_initializing {
                div { class: "initializing-overlay",
                    div { class: "spinner" }
                    p { "Initializing Neural Network..." }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use lesson_core::{CodingLevel, MathLevel, UserContext};

use crate::vm::OnboardingDraft;

fn choice_class(selected: bool) -> &'static str {
    if selected {
        "choice choice--selected"
    } else {
        "choice"
    }
}

/// Background questions. Choices come from the level enums, so every member
/// shows up without touching this view.
#[component]
pub fn OnboardingView(on_submit: Callback<UserContext>) -> Element {
    let mut draft = use_signal(OnboardingDraft::default);
    let current = draft.read().clone();

    rsx! {
        div { class: "onboarding",
            div { class: "onboarding-intro",
                h1 { "QuantMind Academy" }
                p {
                    "Before we begin the deep dive (approx. 2,000 words), help me tailor the curriculum to your background."
                }
            }

            form {
                class: "onboarding-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(draft.read().submit());
                },

                div { class: "onboarding-field",
                    label { class: "field-label field-label--math", "Math Comfort Level" }
                    div { class: "choice-grid",
                        for level in MathLevel::ALL {
                            button {
                                key: "{level.label()}",
                                class: choice_class(current.math_level == level),
                                r#type: "button",
                                onclick: move |_| draft.write().select_math(level),
                                "{level.label()}"
                            }
                        }
                    }
                }

                div { class: "onboarding-field",
                    label { class: "field-label field-label--coding", "Coding Experience" }
                    div { class: "choice-grid",
                        for level in CodingLevel::ALL {
                            button {
                                key: "{level.label()}",
                                class: choice_class(current.coding_level == level),
                                r#type: "button",
                                onclick: move |_| draft.write().select_coding(level),
                                "{level.label()}"
                            }
                        }
                    }
                }

                div { class: "onboarding-field",
                    label { class: "field-label", r#for: "specific-interest", "Specific Focus (Optional)" }
                    input {
                        id: "specific-interest",
                        r#type: "text",
                        value: "{current.specific_interest}",
                        placeholder: "e.g., Sentiment Analysis, High Frequency Trading...",
                        oninput: move |evt| draft.write().set_interest(evt.value()),
                    }
                }

                button { class: "primary start-lesson", r#type: "submit", "Start Lesson" }
            }
        }
    }
}

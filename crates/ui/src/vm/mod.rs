mod markdown_vm;
mod onboarding_vm;
mod reader_vm;

pub use markdown_vm::{DEFAULT_CODE_LABEL, code_block_label, markdown_to_html, sanitize_html};
pub use onboarding_vm::OnboardingDraft;
pub use reader_vm::{FollowGate, LESSON_TITLE, ReaderVm};

mod content;
mod prompt;
mod runner;

pub use content::{ERROR_NOTICE, LessonContentService, LessonStreamOutcome};
pub use prompt::{
    FALLBACK_INTEREST, LESSON_PROMPT, LESSON_TEMPERATURE, LESSON_THINKING_BUDGET,
    effective_interest, lesson_request, system_instruction,
};
pub use runner::{LessonReport, LessonState, submit_lesson};

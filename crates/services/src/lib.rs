#![forbid(unsafe_code)]

pub mod ai;
pub mod error;
pub mod lesson;

pub use ai::{FragmentStream, GeminiClient, GeminiConfig, GenerationRequest, TextGenerator};
pub use error::GenerationError;
pub use lesson::{
    ERROR_NOTICE, LessonContentService, LessonReport, LessonState, LessonStreamOutcome,
    submit_lesson,
};

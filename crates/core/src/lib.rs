#![forbid(unsafe_code)]

pub mod lesson;
pub mod model;
pub mod scroll;

pub use lesson::{AppendOutcome, ContentBuffer, LessonError, LessonMachine, LessonPhase, LessonTicket};
pub use model::{CodingLevel, MathLevel, UserContext};
pub use scroll::{AUTO_SCROLL_THRESHOLD, AutoScroll, ScrollMetrics};

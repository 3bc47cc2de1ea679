pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::{
    App, LessonActions, LessonPhaseView, LessonScreen, LessonSignal, use_lesson_actions,
};
pub use context::{AppContext, UiApp, build_app_context};

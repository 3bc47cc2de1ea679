use std::sync::Arc;

use services::LessonContentService;

pub trait UiApp: Send + Sync {
    fn lesson_content(&self) -> Arc<LessonContentService>;
}

#[derive(Clone)]
pub struct AppContext {
    lesson_content: Arc<LessonContentService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_content: app.lesson_content(),
        }
    }

    #[must_use]
    pub fn lesson_content(&self) -> Arc<LessonContentService> {
        Arc::clone(&self.lesson_content)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

use std::sync::Arc;

use futures::StreamExt;
use lesson_core::UserContext;
use tracing::{error, info};

use crate::ai::TextGenerator;
use crate::error::GenerationError;
use crate::lesson::prompt::{effective_interest, lesson_request};

/// In-band notice appended when generation fails at any point.
pub const ERROR_NOTICE: &str =
    "\n\n**Error:** Failed to generate content. Please check your API key and try again.";

/// How a lesson stream settled. Never a rejection: failures were already
/// surfaced to the reader as [`ERROR_NOTICE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonStreamOutcome {
    Completed { fragments: usize },
    /// `fragments` counts the lesson text delivered before the failure, not the notice.
    Failed { fragments: usize },
}

impl LessonStreamOutcome {
    #[must_use]
    pub fn fragments(self) -> usize {
        match self {
            Self::Completed { fragments } | Self::Failed { fragments } => fragments,
        }
    }

    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Streams the tailored lesson from a text provider.
#[derive(Clone)]
pub struct LessonContentService {
    generator: Arc<dyn TextGenerator>,
}

impl LessonContentService {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Stream lesson text for `context` into `on_fragment`.
    ///
    /// Every non-empty fragment is delivered once, in arrival order, before the
    /// next one is awaited. On failure exactly one [`ERROR_NOTICE`] fragment is
    /// delivered and the call still resolves normally.
    pub async fn stream_lesson_content(
        &self,
        context: &UserContext,
        on_fragment: &mut dyn FnMut(&str),
    ) -> LessonStreamOutcome {
        info!(
            provider = self.generator.provider(),
            math_level = ?context.math_level(),
            coding_level = ?context.coding_level(),
            interest = effective_interest(context),
            "starting lesson stream"
        );

        let mut delivered = 0usize;
        match self.forward(context, on_fragment, &mut delivered).await {
            Ok(()) => {
                info!(fragments = delivered, "lesson stream completed");
                LessonStreamOutcome::Completed {
                    fragments: delivered,
                }
            }
            Err(err) => {
                error!(error = %err, fragments = delivered, "lesson stream failed");
                on_fragment(ERROR_NOTICE);
                LessonStreamOutcome::Failed {
                    fragments: delivered,
                }
            }
        }
    }

    async fn forward(
        &self,
        context: &UserContext,
        on_fragment: &mut dyn FnMut(&str),
        delivered: &mut usize,
    ) -> Result<(), GenerationError> {
        let mut stream = self.generator.stream(lesson_request(context)).await?;
        while let Some(fragment) = stream.next().await {
            let fragment = fragment?;
            if fragment.is_empty() {
                continue;
            }
            on_fragment(&fragment);
            *delivered += 1;
        }
        Ok(())
    }
}

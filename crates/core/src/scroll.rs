use serde::Deserialize;

use crate::lesson::LessonPhase;

/// Distance from the bottom, in CSS pixels, under which the reader follows new text.
pub const AUTO_SCROLL_THRESHOLD: f64 = 200.0;

/// Scroll state of the reader container as reported by the webview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn distance_from_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }
}

/// Follow-the-stream policy for the reader.
///
/// A user who scrolled up to re-read is left alone; only a viewport already
/// near the bottom is pulled along as text arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroll {
    threshold: f64,
}

impl AutoScroll {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn should_follow(&self, phase: LessonPhase, metrics: ScrollMetrics) -> bool {
        phase == LessonPhase::Generating && metrics.distance_from_bottom() < self.threshold
    }
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(AUTO_SCROLL_THRESHOLD)
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `TextGenerator`.
///
/// These never reach the lesson state machine; `LessonContentService` turns
/// them into an in-band notice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("text generation is not configured")]
    Disabled,
    #[error("text generation request failed with status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed stream chunk: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider error {code}: {message}")]
    Provider { code: i64, message: String },
    #[error("prompt blocked by provider: {0}")]
    Blocked(String),
}

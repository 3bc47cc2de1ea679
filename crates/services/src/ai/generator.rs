use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::GenerationError;

/// Incremental text from one generation call, in arrival order.
///
/// Ends with `None` on normal completion. An `Err` item means the stream broke
/// and nothing after it is meaningful.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, GenerationError>> + Send>>;

/// One request to a streaming text provider.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f32,
    pub thinking_budget: Option<u32>,
}

/// Streaming text provider seam.
///
/// Implementations issue exactly one request per call and do not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name for logs.
    fn provider(&self) -> &str;

    /// Open a single streaming call.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the call cannot be set up. Failures after
    /// the stream opened arrive as `Err` items on the stream.
    async fn stream(&self, request: GenerationRequest) -> Result<FragmentStream, GenerationError>;
}

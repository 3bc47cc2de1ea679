use std::collections::VecDeque;

use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};
use lesson_core::model::AiSettings;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::generator::{FragmentStream, GenerationRequest, TextGenerator};
use crate::ai::sse::SseDecoder;
use crate::error::GenerationError;

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Returns `None` when no API key is configured.
    #[must_use]
    pub fn from_settings(settings: &AiSettings) -> Option<Self> {
        let api_key = settings.api_key()?;
        Some(Self {
            base_url: settings.base_url().to_string(),
            api_key: api_key.to_string(),
            model: settings.model().to_string(),
        })
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Gemini `streamGenerateContent` client.
///
/// Without a config every call fails with `GenerationError::Disabled`.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: Option<GeminiConfig>,
}

impl GeminiClient {
    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &AiSettings) -> Self {
        Self::new(GeminiConfig::from_settings(settings))
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn provider(&self) -> &str {
        "gemini"
    }

    async fn stream(&self, request: GenerationRequest) -> Result<FragmentStream, GenerationError> {
        let config = self.config.as_ref().ok_or(GenerationError::Disabled)?;

        let url = config.stream_url();
        debug!(%url, model = %config.model, "opening gemini stream");
        let payload = GenerateContentRequest::from_request(&request);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .header(header::ACCEPT, "text/event-stream")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::HttpStatus { status, body });
        }

        Ok(fragment_stream(response.bytes_stream()))
    }
}

//
// ─── STREAM DECODING ──────────────────────────────────────────────────────────
//

struct DecodeState<S> {
    bytes: std::pin::Pin<Box<S>>,
    decoder: SseDecoder,
    pending: VecDeque<Result<String, GenerationError>>,
    done: bool,
}

impl<S> DecodeState<S> {
    fn enqueue(&mut self, data: &str) {
        match parse_chunk(data) {
            Ok(Some(text)) => self.pending.push_back(Ok(text)),
            Ok(None) => {}
            Err(err) => {
                self.pending.push_back(Err(err));
                self.done = true;
            }
        }
    }
}

/// Turn an SSE byte stream into text fragments, one per decoded chunk.
///
/// The stream stops after the first error item.
pub(crate) fn fragment_stream<S, B, E>(bytes: S) -> FragmentStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<GenerationError> + Send + 'static,
{
    let state = DecodeState {
        bytes: Box::pin(bytes),
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        done: false,
    };

    Box::pin(stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((item, state));
            }
            if state.done {
                return None;
            }
            match state.bytes.next().await {
                Some(Ok(chunk)) => {
                    for data in state.decoder.push(chunk.as_ref()) {
                        if state.done {
                            break;
                        }
                        state.enqueue(&data);
                    }
                }
                Some(Err(err)) => {
                    state.pending.push_back(Err(err.into()));
                    state.done = true;
                }
                None => {
                    state.done = true;
                    if let Some(data) = state.decoder.finish() {
                        state.enqueue(&data);
                    }
                }
            }
        }
    }))
}

/// Extract the lesson text carried by one SSE payload.
///
/// Thought parts are skipped and the remaining text parts are joined, so one
/// provider chunk becomes at most one fragment.
fn parse_chunk(data: &str) -> Result<Option<String>, GenerationError> {
    if data.trim() == "[DONE]" {
        return Ok(None);
    }

    let chunk: StreamChunk = serde_json::from_str(data)?;
    if let Some(err) = chunk.error {
        return Err(GenerationError::Provider {
            code: err.code,
            message: err.message,
        });
    }
    if let Some(reason) = chunk.prompt_feedback.and_then(|feedback| feedback.block_reason) {
        return Err(GenerationError::Blocked(reason));
    }

    let text: String = chunk
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .filter(|part| !part.thought)
        .filter_map(|part| part.text)
        .collect();

    Ok((!text.is_empty()).then_some(text))
}

//
// ─── WIRE TYPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![RequestContent {
                role: "user",
                parts: vec![TextPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                thinking_config: request
                    .thinking_budget
                    .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

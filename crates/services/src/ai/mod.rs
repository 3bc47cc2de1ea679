mod gemini;
mod generator;
mod sse;

pub use gemini::{GeminiClient, GeminiConfig};
pub use generator::{FragmentStream, GenerationRequest, TextGenerator};

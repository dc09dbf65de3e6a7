//! Prompt construction and the Gemini generation client.

pub mod gemini;
pub mod prompt;

pub use gemini::{GeminiClient, MessageGenerator};
pub use prompt::{GenerationRequest, build_request};

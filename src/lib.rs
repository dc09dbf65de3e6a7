//! grapheus - AI-assisted commit messages for staged changes.
//!
//! # Overview
//!
//! grapheus reads the staged diff from the current repository, asks the
//! Gemini API for a commit message following the project's style guide,
//! walks the operator through an approve/edit/reject loop, and finally runs
//! `git commit` with the approved message.

pub mod config;
pub mod decode;
pub mod error;
pub mod git;
pub mod llm;
pub mod review;

// Re-export commonly used types
pub use decode::decode_bytes;
pub use error::{ConfigError, GitError, LlmError};
pub use llm::{GeminiClient, GenerationRequest, MessageGenerator, build_request};
pub use review::{Decision, EditorBridge, MessageEditor, ReviewOutcome, review_message};

//! Error types for grapheus modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository. Run `git init` first, then stage your changes.")]
    NotARepository,

    #[error("No staged changes found. Stage files with `git add <paths>` and try again.")]
    NoStagedChanges,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git exited with code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },
}

/// Errors from configuration sources (API key and style guide).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY is not set. Add GEMINI_API_KEY=<your key> to the environment or a .env file."
    )]
    ApiKeyMissing,

    #[error("Style guide not found at {0}. Create it with your commit message conventions.")]
    StyleGuideMissing(PathBuf),

    #[error("Failed to read style guide: {0}")]
    StyleGuideUnreadable(#[source] std::io::Error),
}

/// Errors from the Gemini generation call.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request to the Gemini API failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Gemini API returned HTTP {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Gemini returned an unparseable response: {0}")]
    InvalidResponse(String),

    #[error("Gemini returned an empty message")]
    EmptyResponse,
}

//! Configuration sources: the Gemini API key and the project style guide.

use std::env;
use std::path::Path;

use crate::decode::decode_bytes;
use crate::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Well-known relative path of the project style guide.
pub const STYLE_GUIDE_PATH: &str = "COMMIT_GUIDE.md";

/// Instruction used when the style guide file exists but is empty.
pub const DEFAULT_STYLE_GUIDE: &str = "You are an expert at writing git commit messages. \
     Analyze the changes and produce a clear, concise commit message.";

/// Load the Gemini API key from the environment or a `.env` file.
///
/// A missing or blank key is a configuration error; the key is returned
/// trimmed of surrounding whitespace.
pub fn load_api_key() -> Result<String, ConfigError> {
    // Pick up a .env file if one exists; already-set variables win.
    dotenvy::dotenv().ok();

    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::ApiKeyMissing),
    }
}

/// Load the style guide from `COMMIT_GUIDE.md` under `dir`.
///
/// The file is read as bytes and decoded with the fallback chain so a
/// legacy-encoded guide still loads. A present-but-blank guide substitutes
/// [`DEFAULT_STYLE_GUIDE`]; an absent file is a configuration error.
pub fn load_style_guide(dir: &Path) -> Result<String, ConfigError> {
    let path = dir.join(STYLE_GUIDE_PATH);
    if !path.is_file() {
        return Err(ConfigError::StyleGuideMissing(path));
    }

    let bytes = std::fs::read(&path).map_err(ConfigError::StyleGuideUnreadable)?;
    let text = decode_bytes(&bytes).trim().to_string();

    if text.is_empty() {
        return Ok(DEFAULT_STYLE_GUIDE.to_string());
    }
    Ok(text)
}

//! External-editor round trip for the candidate message.

use std::env;
use std::io::Write as _;
use std::process::{Command, ExitStatus};

use tracing::warn;

use crate::decode::decode_bytes;

/// Environment variable consulted for the editor program.
pub const EDITOR_VAR: &str = "EDITOR";

/// Editor used when `$EDITOR` is unset or not on PATH.
pub const DEFAULT_EDITOR: &str = "vim";

/// Seam between the review loop and the external editor.
#[cfg_attr(test, mockall::automock)]
pub trait MessageEditor {
    /// Let the operator edit `current`, returning the replacement text.
    /// Implementations never return an empty message; on any failure they
    /// fall back to `current` unchanged.
    fn edit(&self, current: &str) -> String;
}

/// What came back from one editor invocation.
enum EditResult {
    Edited(String),
    EditorFailed(ExitStatus),
    EmptyMessage,
}

/// Hands the candidate to the operator's editor via a temporary file.
///
/// The file lives only for the duration of one `edit` call and is deleted on
/// every exit path, including panics, when the handle drops.
pub struct EditorBridge {
    program: String,
}

impl EditorBridge {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the editor program from `$EDITOR`, falling back to
    /// [`DEFAULT_EDITOR`] when unset or when the configured program is not
    /// on PATH.
    pub fn resolve() -> Self {
        match env::var(EDITOR_VAR) {
            Ok(program) if !program.trim().is_empty() => {
                let program = program.trim().to_string();
                if which::which(&program).is_err() {
                    warn!(
                        "{EDITOR_VAR}={program} not found on PATH, falling back to {DEFAULT_EDITOR}"
                    );
                    return Self::new(DEFAULT_EDITOR);
                }
                Self::new(program)
            }
            _ => Self::new(DEFAULT_EDITOR),
        }
    }

    fn try_edit(&self, current: &str) -> std::io::Result<EditResult> {
        let mut file = tempfile::Builder::new()
            .prefix("grapheus-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(current.as_bytes())?;
        file.flush()?;

        // The editor inherits the terminal; this blocks until it exits.
        let status = Command::new(&self.program).arg(file.path()).status()?;
        if !status.success() {
            return Ok(EditResult::EditorFailed(status));
        }

        let bytes = std::fs::read(file.path())?;
        let edited = decode_bytes(&bytes).trim().to_string();
        if edited.is_empty() {
            return Ok(EditResult::EmptyMessage);
        }

        Ok(EditResult::Edited(edited))
    }
}

impl MessageEditor for EditorBridge {
    fn edit(&self, current: &str) -> String {
        match self.try_edit(current) {
            Ok(EditResult::Edited(edited)) => edited,
            Ok(EditResult::EditorFailed(status)) => {
                eprintln!("Warning: editor exited with {status}; keeping the original message.");
                current.to_string()
            }
            Ok(EditResult::EmptyMessage) => {
                eprintln!("Warning: edited message is empty; keeping the original message.");
                current.to_string()
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not run editor '{}': {e}; keeping the original message.",
                    self.program
                );
                current.to_string()
            }
        }
    }
}

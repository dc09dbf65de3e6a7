//! Repository detection and staged-diff extraction.

use std::path::Path;
use std::process::Command;

use crate::decode::decode_bytes;
use crate::error::GitError;

/// Whether `dir` is the top level of a git repository.
///
/// Checks only for a `.git` directory directly under `dir`; no ancestor
/// search. The tool commits from the repository root, so a deeper match
/// would commit against a different working tree than the one displayed.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").is_dir()
}

/// Extract the staged diff (`git diff --cached`) from the repository at `dir`.
///
/// Returns the decoded diff text, trimmed of surrounding whitespace and
/// guaranteed non-empty. Fails with [`GitError::NotARepository`] outside a
/// repository, [`GitError::NoStagedChanges`] when nothing is staged, and
/// [`GitError::CommandFailed`] when git itself reports an error.
pub fn staged_diff(dir: &Path) -> Result<String, GitError> {
    if !is_repository(dir) {
        return Err(GitError::NotARepository);
    }

    let output = Command::new("git")
        .args(["diff", "--cached"])
        .current_dir(dir)
        .output()
        .map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            code: output.status.code().unwrap_or(-1),
            stderr: decode_bytes(&output.stderr).trim().to_string(),
        });
    }

    let diff = decode_bytes(&output.stdout).trim().to_string();
    if diff.is_empty() {
        return Err(GitError::NoStagedChanges);
    }

    Ok(diff)
}

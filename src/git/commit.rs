//! Commit execution for the approved message.

use std::path::Path;
use std::process::Command;

use crate::decode::decode_bytes;

/// Commit the staged changes at `dir` with `message`.
///
/// The message is passed as a single `-m` argument; the caller has already
/// validated it as non-empty. Returns `true` on success. Failures are
/// reported to stderr and returned as `false` rather than propagated, since
/// this is the final step and the outcome maps directly to the exit code.
pub fn commit_staged(dir: &Path, message: &str) -> bool {
    let output = match Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            eprintln!("\nFailed to run git commit: {e}\n");
            return false;
        }
    };

    if output.status.success() {
        println!("\nCommit created successfully.");
        let stdout = decode_bytes(&output.stdout);
        if !stdout.trim().is_empty() {
            println!("{}", stdout.trim_end());
        }
        true
    } else {
        eprintln!(
            "\ngit commit failed:\n{}\n",
            decode_bytes(&output.stderr).trim()
        );
        false
    }
}

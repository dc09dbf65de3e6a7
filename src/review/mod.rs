//! The approve/edit/reject review loop for generated commit messages.

pub mod editor;

pub use editor::{EditorBridge, MessageEditor};

use std::io::{self, BufRead, Write};

/// Width of the banner framing the displayed candidate.
const BANNER_WIDTH: usize = 70;

/// One operator decision about the current candidate message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
    Edit,
}

impl Decision {
    /// Parse a decision token. Recognizes `y`, `n`, and `e`,
    /// case-insensitively, ignoring surrounding whitespace.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "y" => Some(Self::Approve),
            "n" => Some(Self::Reject),
            "e" => Some(Self::Edit),
            _ => None,
        }
    }
}

/// How the review loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The operator approved this exact message; proceed to commit.
    Approved(String),
    /// The operator rejected the candidate; nothing is committed.
    Rejected,
}

/// Run the review loop until the operator approves or rejects.
///
/// Displays the candidate, prompts for a decision, and on `e` hands the
/// candidate to the editor, replacing it wholesale with whatever comes back.
/// There is no iteration cap; the loop is operator-paced.
pub fn review_message<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    editor: &dyn MessageEditor,
    initial: String,
) -> io::Result<ReviewOutcome> {
    let mut candidate = initial;

    loop {
        display_candidate(out, &candidate)?;

        match read_decision(input, out)? {
            Decision::Approve => return Ok(ReviewOutcome::Approved(candidate)),
            Decision::Reject => {
                writeln!(out, "\nCommit cancelled.")?;
                return Ok(ReviewOutcome::Rejected);
            }
            Decision::Edit => {
                candidate = editor.edit(&candidate);
            }
        }
    }
}

fn display_candidate<W: Write>(out: &mut W, candidate: &str) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{banner}")?;
    writeln!(out, "Generated commit message:")?;
    writeln!(out, "{banner}")?;
    writeln!(out, "{candidate}")?;
    writeln!(out, "{banner}")?;
    Ok(())
}

/// Prompt until the operator enters a recognized decision token.
///
/// Invalid tokens re-ask for a decision without re-displaying the candidate.
fn read_decision<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Decision> {
    loop {
        writeln!(out, "\n[y] approve and commit  [n] cancel  [e] edit message")?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a decision was made",
            ));
        }

        match Decision::parse(&line) {
            Some(decision) => return Ok(decision),
            None => writeln!(out, "Please enter y, n, or e.")?,
        }
    }
}

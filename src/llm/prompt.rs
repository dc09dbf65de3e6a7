//! Prompt construction for commit message generation.

/// The payload for one generation call: the project style guide as the
/// system instruction (verbatim) and a user message embedding the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_message: String,
}

/// Delimiter line framing the diff inside the user message.
const DIFF_DELIMITER: &str = "---";

/// Build the generation request from the style guide and the staged diff.
///
/// The user message is a fixed template: the diff verbatim between delimiter
/// lines, plus the required message shape. Nothing beyond the two inputs is
/// configurable at runtime.
pub fn build_request(style_guide: &str, diff: &str) -> GenerationRequest {
    let user_message = format!(
        "Below is the output of `git diff --cached`. Analyze these changes and \
         write a commit message for them.\n\
         \n\
         Message format:\n\
         - First line: a concise imperative summary, 50 characters or fewer\n\
         - Then a blank line\n\
         - Then an optional elaboration, one bullet point per item\n\
         \n\
         {DIFF_DELIMITER}\n\
         {diff}\n\
         {DIFF_DELIMITER}\n\
         \n\
         Write the commit message for the changes above:"
    );

    GenerationRequest {
        system_instruction: style_guide.to_string(),
        user_message,
    }
}

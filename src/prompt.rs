use crate::core::models::ToolKind;

/// System instruction for drafting commit messages from a staged diff.
pub const COMMIT_MESSAGE_PROMPT: &str = "You are a senior engineer writing git commit messages. \
    You will receive the output of `git diff --cached`. \
    Write one commit message for the whole change: \
    a summary line in the imperative mood of at most 72 characters, \
    then a blank line, then a short body explaining what changed and why when that is not obvious from the summary. \
    Output ONLY the commit message, with no surrounding quotes, code fences or commentary.";

/// System instruction for naming a snippet of clipboard text.
pub const FILE_NAME_PROMPT: &str = "You name text files. \
    You will receive the full contents of a file. \
    Reply with a short, descriptive file name for it: lowercase words joined by hyphens, \
    at most 6 words, no extension, no path, no quotes, no explanation. \
    Output ONLY the file name.";

/// Marker placed after a diff that was cut to fit the request.
pub const TRUNCATION_NOTICE: &str = "\n[diff truncated]\n";

#[must_use]
pub const fn system_prompt(kind: ToolKind) -> &'static str {
    match kind {
        ToolKind::CommitMessage => COMMIT_MESSAGE_PROMPT,
        ToolKind::FileName => FILE_NAME_PROMPT,
    }
}

use tracing::{info, warn};

use crate::clients::{ClipboardReader, DiffSource};
use crate::errors::ToolError;
use crate::prompt::TRUNCATION_NOTICE;

/// Read the staged diff, cut to at most `max_bytes` plus a truncation notice.
///
/// # Errors
///
/// Returns `ToolError::EmptyInput` when nothing is staged, or whatever the diff
/// source reports.
pub fn collect_staged_diff(source: &dyn DiffSource, max_bytes: usize) -> Result<String, ToolError> {
    let diff = source.staged_diff()?;
    if diff.trim().is_empty() {
        return Err(ToolError::EmptyInput(
            "no staged changes (run `git add` first)".to_string(),
        ));
    }

    let kept = truncate_at_char_boundary(&diff, max_bytes);
    if kept.len() < diff.len() {
        warn!(
            diff_bytes = diff.len(),
            kept_bytes = kept.len(),
            "Staged diff truncated"
        );
        return Ok(format!("{kept}{TRUNCATION_NOTICE}"));
    }

    info!(bytes = diff.len(), "Collected staged diff");
    Ok(diff)
}

/// Read the clipboard text. The text is returned unmodified.
///
/// # Errors
///
/// Returns `ToolError::EmptyInput` when the clipboard holds no text.
pub fn collect_clipboard_text(reader: &mut dyn ClipboardReader) -> Result<String, ToolError> {
    let text = reader.read_text()?;
    if text.trim().is_empty() {
        return Err(ToolError::EmptyInput("clipboard is empty".to_string()));
    }
    info!(bytes = text.len(), "Collected clipboard text");
    Ok(text)
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a character.
#[must_use]
pub fn truncate_at_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

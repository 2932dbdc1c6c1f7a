use std::io::Write;

use super::Progress;
use super::deliver::emit_commit_message;
use crate::ai::{ChatTransport, build_request, validate_response};
use crate::clients::{ClipboardWriter, DiffSource};
use crate::collect::collect_staged_diff;
use crate::core::config::AppConfig;
use crate::core::models::{Stage, ToolKind};
use crate::errors::ToolError;
use crate::prompt::system_prompt;

/// Draft a commit message for the staged diff, print it and copy it to the clipboard.
///
/// Returns the message. Nothing is printed unless the response validated.
///
/// # Errors
///
/// Any `ToolError`; an empty diff fails before the transport is used.
pub async fn run_commit_message(
    config: &AppConfig,
    diff_source: &dyn DiffSource,
    transport: &dyn ChatTransport,
    clipboard: &mut dyn ClipboardWriter,
    out: &mut dyn Write,
) -> Result<String, ToolError> {
    let mut progress = Progress::start(ToolKind::CommitMessage);
    let result = commit_pipeline(
        &mut progress,
        config,
        diff_source,
        transport,
        clipboard,
        out,
    )
    .await;
    progress.finish(result)
}

async fn commit_pipeline(
    progress: &mut Progress,
    config: &AppConfig,
    diff_source: &dyn DiffSource,
    transport: &dyn ChatTransport,
    clipboard: &mut dyn ClipboardWriter,
    out: &mut dyn Write,
) -> Result<String, ToolError> {
    let diff = collect_staged_diff(diff_source, config.max_diff_bytes)?;

    progress.advance(Stage::Building);
    let request = build_request(
        &diff,
        &config.model,
        &config.temperatures,
        system_prompt(ToolKind::CommitMessage),
    )?;

    progress.advance(Stage::Calling);
    let raw = transport.send(&request).await?;

    progress.advance(Stage::Validating);
    let message = validate_response(raw.status, &raw.body)?;

    progress.advance(Stage::Emitting);
    emit_commit_message(&message, out, clipboard)?;
    Ok(message)
}

use std::io::Write;
use std::path::{Path, PathBuf};

use super::Progress;
use super::deliver::write_named_file;
use crate::ai::{ChatTransport, build_request, validate_response};
use crate::clients::ClipboardReader;
use crate::collect::collect_clipboard_text;
use crate::core::config::AppConfig;
use crate::core::models::{Stage, ToolKind};
use crate::errors::ToolError;
use crate::prompt::system_prompt;

/// Name the clipboard text with the model's help and save it in `dir`.
///
/// The saved file holds the clipboard text itself; the model only picks the name.
/// The final path is printed to `out` and returned.
///
/// # Errors
///
/// Any `ToolError`; an empty clipboard fails before the transport is used.
pub async fn run_file_naming(
    config: &AppConfig,
    clipboard: &mut dyn ClipboardReader,
    transport: &dyn ChatTransport,
    dir: &Path,
    out: &mut dyn Write,
) -> Result<PathBuf, ToolError> {
    let mut progress = Progress::start(ToolKind::FileName);
    let result = file_naming_pipeline(&mut progress, config, clipboard, transport, dir, out).await;
    progress.finish(result)
}

async fn file_naming_pipeline(
    progress: &mut Progress,
    config: &AppConfig,
    clipboard: &mut dyn ClipboardReader,
    transport: &dyn ChatTransport,
    dir: &Path,
    out: &mut dyn Write,
) -> Result<PathBuf, ToolError> {
    let text = collect_clipboard_text(clipboard)?;

    progress.advance(Stage::Building);
    let request = build_request(
        &text,
        &config.model,
        &config.temperatures,
        system_prompt(ToolKind::FileName),
    )?;

    progress.advance(Stage::Calling);
    let raw = transport.send(&request).await?;

    progress.advance(Stage::Validating);
    let name = validate_response(raw.status, &raw.body)?;

    progress.advance(Stage::Emitting);
    let path = write_named_file(dir, &name, &text)?;
    writeln!(out, "Saved clipboard to {}", path.display())?;
    Ok(path)
}

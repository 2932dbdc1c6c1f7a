use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::clients::ClipboardWriter;
use crate::errors::ToolError;
use crate::utils::naming::{FILE_EXTENSION, file_stem_from_result, next_available_name};

/// Print the commit message and copy it to the clipboard, both unchanged.
///
/// # Errors
///
/// Returns `ToolError::Io` if stdout cannot be written, or the clipboard's error.
pub fn emit_commit_message(
    message: &str,
    out: &mut dyn Write,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<(), ToolError> {
    writeln!(out, "{message}")?;
    out.flush()?;
    clipboard.write_text(message)?;
    info!("Commit message copied to clipboard");
    Ok(())
}

/// Write `payload` to a new `.txt` file in `dir` named after `result`.
///
/// The file is created with `create_new`, so a file that appears between the
/// existence check and the write is never overwritten.
///
/// # Errors
///
/// `ToolError::EmptyResult` if `result` yields no usable name, `ToolError::Io` if
/// the file cannot be created or written.
pub fn write_named_file(dir: &Path, result: &str, payload: &str) -> Result<PathBuf, ToolError> {
    let stem = file_stem_from_result(result)?;
    let path = next_available_name(&dir.join(&stem), FILE_EXTENSION, Path::exists);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    file.write_all(payload.as_bytes())?;
    file.flush()?;

    info!(path = %path.display(), bytes = payload.len(), "Wrote clipboard text");
    Ok(path)
}

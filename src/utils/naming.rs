//! File naming with collision avoidance

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::errors::ToolError;

/// Extension given to every file written by the file-naming tool.
pub const FILE_EXTENSION: &str = "txt";

const QUOTE_CHARS: &[char] = &['"', '\'', '`'];

/// Turn the model's reply into a bare file stem.
///
/// Whitespace and quote characters are removed, path separators become `-`,
/// leading dots and a trailing `.txt` are dropped so the result is a plain,
/// visible name inside the target directory.
///
/// # Errors
///
/// Returns `ToolError::EmptyResult` if nothing usable is left.
pub fn file_stem_from_result(result: &str) -> Result<String, ToolError> {
    let cleaned: String = result
        .chars()
        .filter(|c| !c.is_whitespace() && !QUOTE_CHARS.contains(c))
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();

    let suffix = format!(".{FILE_EXTENSION}");
    let without_ext = if cleaned.to_ascii_lowercase().ends_with(&suffix) {
        &cleaned[..cleaned.len() - suffix.len()]
    } else {
        cleaned.as_str()
    };

    let stem = without_ext.trim_start_matches('.');
    if stem.is_empty() {
        return Err(ToolError::EmptyResult);
    }
    Ok(stem.to_string())
}

/// First path of the form `base.ext`, `base-1.ext`, `base-2.ext`, … for which
/// `exists` returns false.
#[must_use]
pub fn next_available_name<F>(base: &Path, extension: &str, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let candidate = |suffix: Option<u64>| -> PathBuf {
        let mut name = OsString::from(base.as_os_str());
        if let Some(n) = suffix {
            name.push(format!("-{n}"));
        }
        name.push(format!(".{extension}"));
        PathBuf::from(name)
    };

    let first = candidate(None);
    if !exists(&first) {
        return first;
    }

    let mut n: u64 = 1;
    loop {
        let path = candidate(Some(n));
        if !exists(&path) {
            return path;
        }
        n += 1;
    }
}

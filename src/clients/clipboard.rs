//! System clipboard access.

use arboard::Clipboard;
use tracing::debug;

use crate::errors::ToolError;

pub trait ClipboardReader {
    /// Current text contents. A clipboard holding no text reads as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::ToolUnavailable` if the clipboard cannot be accessed.
    fn read_text(&mut self) -> Result<String, ToolError>;
}

pub trait ClipboardWriter {
    /// # Errors
    ///
    /// Returns `ToolError::ToolUnavailable` if the clipboard cannot be written.
    fn write_text(&mut self, text: &str) -> Result<(), ToolError>;
}

/// The desktop clipboard, through `arboard`.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    /// # Errors
    ///
    /// Returns `ToolError::ToolUnavailable` when no clipboard is available, e.g. a
    /// headless session without a display server.
    pub fn new() -> Result<Self, ToolError> {
        Ok(Self {
            inner: Clipboard::new()?,
        })
    }
}

impl ClipboardReader for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ToolError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("Clipboard holds no text");
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ToolError> {
        self.inner.set_text(text)?;
        debug!(bytes = text.len(), "Copied text to clipboard");
        Ok(())
    }
}

use std::io::ErrorKind;
use std::process::Command;

use tracing::debug;

use crate::errors::ToolError;

/// Source of the bearer credential sent to the chat API.
pub trait SecretProvider {
    /// # Errors
    ///
    /// Returns `ToolError::MissingCredential` when no credential can be produced, or
    /// `ToolError::ToolUnavailable` when the backing store cannot be reached.
    fn api_key(&self) -> Result<String, ToolError>;
}

/// A credential already known at startup, e.g. from `OPENAI_API_KEY`.
#[derive(Clone)]
pub struct StaticSecret {
    value: String,
}

impl StaticSecret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for StaticSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticSecret(<redacted>)")
    }
}

impl SecretProvider for StaticSecret {
    fn api_key(&self) -> Result<String, ToolError> {
        Ok(self.value.clone())
    }
}

/// Runs a shell command (a keychain or password-store lookup) and uses its
/// trimmed stdout as the credential.
#[derive(Debug, Clone)]
pub struct CommandSecretProvider {
    command: String,
}

impl CommandSecretProvider {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl SecretProvider for CommandSecretProvider {
    fn api_key(&self) -> Result<String, ToolError> {
        debug!(command = %self.command, "Reading API key from credential command");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ToolError::ToolUnavailable(
                    "sh is required to run GPTOOLS_SECRET_COMMAND".to_string(),
                ),
                _ => ToolError::ToolUnavailable(format!(
                    "credential command failed to start: {e}"
                )),
            })?;

        // 127 is the shell's "command not found".
        if output.status.code() == Some(127) {
            return Err(ToolError::ToolUnavailable(format!(
                "credential command not found: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        if !output.status.success() {
            return Err(ToolError::MissingCredential(format!(
                "credential command exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if key.is_empty() {
            return Err(ToolError::MissingCredential(
                "credential command printed nothing".to_string(),
            ));
        }
        Ok(key)
    }
}

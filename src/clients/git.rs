use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::errors::ToolError;

/// Produces the staged changes of a repository as a unified diff.
pub trait DiffSource {
    /// # Errors
    ///
    /// Returns `ToolError::ToolUnavailable` if the diff cannot be produced.
    fn staged_diff(&self) -> Result<String, ToolError>;
}

/// Runs `git diff --cached` in `repo_dir`, or in the current directory.
#[derive(Debug, Clone, Default)]
pub struct GitDiffSource {
    repo_dir: Option<PathBuf>,
}

impl GitDiffSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_dir(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(repo_dir.into()),
        }
    }
}

impl DiffSource for GitDiffSource {
    fn staged_diff(&self) -> Result<String, ToolError> {
        let mut command = Command::new("git");
        command.args(["diff", "--cached", "--no-color", "--no-ext-diff"]);
        if let Some(dir) = &self.repo_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => ToolError::ToolUnavailable("git is not installed".to_string()),
            _ => ToolError::ToolUnavailable(format!("failed to run git: {e}")),
        })?;

        if !output.status.success() {
            return Err(ToolError::ToolUnavailable(format!(
                "git diff --cached failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let diff = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = diff.len(), "Read staged diff");
        Ok(diff)
    }
}

//! End-to-end pipelines for the two tools

pub mod commit;
pub mod deliver;
pub mod filename;

use tracing::{debug, info};

use crate::core::models::{Stage, ToolKind};
use crate::errors::ToolError;

pub use commit::run_commit_message;
pub use filename::run_file_naming;

/// Tracks and logs the stage of one invocation.
#[derive(Debug)]
pub struct Progress {
    tool: ToolKind,
    stage: Stage,
}

impl Progress {
    #[must_use]
    pub fn start(tool: ToolKind) -> Self {
        info!(tool = tool.binary_name(), stage = %Stage::Collecting, "Stage entered");
        Self {
            tool,
            stage: Stage::Collecting,
        }
    }

    pub fn advance(&mut self, stage: Stage) {
        self.stage = stage;
        info!(tool = self.tool.binary_name(), stage = %stage, "Stage entered");
    }

    /// Record the terminal outcome of the invocation.
    ///
    /// Failures are logged at debug level; the binary prints the diagnostic itself.
    pub fn finish<T>(mut self, result: Result<T, ToolError>) -> Result<T, ToolError> {
        match result {
            Ok(value) => {
                self.advance(Stage::Done);
                Ok(value)
            }
            Err(e) => {
                debug!(
                    tool = self.tool.binary_name(),
                    stage = %self.stage,
                    kind = e.kind(),
                    "Invocation failed: {e}"
                );
                Err(e)
            }
        }
    }
}

//! Command-line surface shared by both binaries

use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::debug;

use crate::core::config::{AppConfig, DEFAULT_MODEL};
use crate::core::models::ToolKind;
use crate::errors::ToolError;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[arg(value_name = "MODEL", help = format!("Chat model identifier [default: {DEFAULT_MODEL}]"))]
    pub model: Option<String>,
}

impl Cli {
    /// Parse `std::env::args` for `kind`, exiting with usage on bad arguments.
    #[must_use]
    pub fn parse_for(kind: ToolKind) -> Self {
        let about = match kind {
            ToolKind::CommitMessage => {
                "Draft a commit message for the staged changes and copy it to the clipboard"
            }
            ToolKind::FileName => "Save the clipboard text to a file named by a chat model",
        };
        let matches = Self::command()
            .name(kind.binary_name())
            .about(about)
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Load `.env` (real environment variables win) and build the configuration.
///
/// # Errors
///
/// See [`AppConfig::from_env`].
pub fn load_config(kind: ToolKind, cli: Cli) -> Result<AppConfig, ToolError> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env loaded: {e}");
    }
    AppConfig::from_env(kind, cli.model)
}

/// Report the outcome on stderr and turn it into the process exit code.
#[must_use]
pub fn exit_code<T>(result: Result<T, ToolError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

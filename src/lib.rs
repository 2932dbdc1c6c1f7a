//! gptools - two small command-line helpers built on a chat-completion API.
//!
//! - `gpt-commit` drafts a commit message from `git diff --cached`, prints it and
//!   copies it to the clipboard.
//! - `gpt-filename` asks the model for a name for the clipboard text and saves the
//!   text to `<name>.txt` (or `<name>-N.txt`) in the current directory.
//!
//! Each invocation runs the same pipeline: collect input, build the request, call
//! the API once, validate the response, emit the result.
//!
//! # Example
//!
//! ```no_run
//! use gptools::ai::HttpChatClient;
//! use gptools::clients::{GitDiffSource, SystemClipboard};
//! use gptools::core::{config::AppConfig, models::ToolKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     gptools::setup_logging();
//!
//!     let config = AppConfig::from_env(ToolKind::CommitMessage, None)?;
//!     let transport = HttpChatClient::new(&config)?;
//!     let mut clipboard = SystemClipboard::new()?;
//!
//!     let message = gptools::features::run_commit_message(
//!         &config,
//!         &GitDiffSource::new(),
//!         &transport,
//!         &mut clipboard,
//!         &mut std::io::stdout(),
//!     )
//!     .await?;
//!     assert!(!message.is_empty());
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod cli;
pub mod clients;
pub mod collect;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod utils;

pub use errors::ToolError;

/// Configure logging to stderr, leaving stdout for the tool's output.
///
/// The filter comes from `GPTOOLS_LOG` (e.g. `info`, `gptools=debug`) and defaults
/// to `warn`. Calling it again after a subscriber is installed does nothing.
///
/// # Example
///
/// ```
/// gptools::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_env("GPTOOLS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

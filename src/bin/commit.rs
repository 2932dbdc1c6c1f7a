use std::process::ExitCode;

use gptools::ai::HttpChatClient;
use gptools::cli::{Cli, exit_code, load_config};
use gptools::clients::{GitDiffSource, SystemClipboard};
use gptools::core::models::ToolKind;
use gptools::features::run_commit_message;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_for(ToolKind::CommitMessage);
    gptools::setup_logging();

    let result = async {
        let config = load_config(ToolKind::CommitMessage, cli)?;
        let transport = HttpChatClient::new(&config)?;
        let mut clipboard = SystemClipboard::new()?;
        run_commit_message(
            &config,
            &GitDiffSource::new(),
            &transport,
            &mut clipboard,
            &mut std::io::stdout().lock(),
        )
        .await
    }
    .await;

    exit_code(result)
}

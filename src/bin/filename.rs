use std::process::ExitCode;

use gptools::ai::HttpChatClient;
use gptools::cli::{Cli, exit_code, load_config};
use gptools::clients::SystemClipboard;
use gptools::core::models::ToolKind;
use gptools::features::run_file_naming;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_for(ToolKind::FileName);
    gptools::setup_logging();

    let result = async {
        let config = load_config(ToolKind::FileName, cli)?;
        let transport = HttpChatClient::new(&config)?;
        let mut clipboard = SystemClipboard::new()?;
        let dir = std::env::current_dir()?;
        run_file_naming(
            &config,
            &mut clipboard,
            &transport,
            &dir,
            &mut std::io::stdout().lock(),
        )
        .await
    }
    .await;

    exit_code(result)
}

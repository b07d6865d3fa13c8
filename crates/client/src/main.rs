//! `stash` binary entry point.

use anyhow::Result;
use stash_client::{CliConfig, Shell, ShellCommand, build_runtime, logging};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let (_guard, log_file) = logging::setup_logging(config.session_id())?;

    let runtime = build_runtime(&config).await?;
    let shell = Shell::new(runtime.handle());

    println!("session '{}' (log: {})", config.session_id(), log_file.display());
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match shell.dispatch(command).await {
            Ok(reply) => println!("{reply}"),
            Err(err) => {
                tracing::error!(error = %err, "command failed");
                println!("error: {err:#}");
            }
        }
    }

    drop(shell);
    runtime.shutdown().await?;
    tracing::info!("client shutdown complete");
    Ok(())
}

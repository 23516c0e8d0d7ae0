//! Strictly Versus - play tic-tac-toe against the computer.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_versus::{Cli, VersusConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = VersusConfig::load(&cli.config)?.with_cli(&cli);

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Configuration resolved");

    run_tui(config).await
}

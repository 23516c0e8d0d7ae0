//! Command-line interface for strictly_versus.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Versus - tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug, Clone)]
#[command(name = "strictly_versus")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "strictly_versus.toml")]
    pub config: PathBuf,

    /// Seed for the computer's tie-breaks (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer "thinking" delay in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Delay before a finished round is cleared, in milliseconds
    #[arg(long)]
    pub restart_ms: Option<u64>,

    /// Ring the terminal bell when a round ends
    #[arg(long)]
    pub bell: bool,

    /// File that receives log output while the UI is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

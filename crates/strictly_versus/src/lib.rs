//! Strictly Versus - tic-tac-toe against a heuristic computer opponent
//!
//! # Architecture
//!
//! - **Orchestrator**: owns the session and its timers, talks over channels
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: ratatui front end that renders snapshots and forwards keys
//!
//! Game rules and the opponent live in [`strictly_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod tui;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::{ConfigError, VersusConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{Command, GameEvent, Orchestrator, SoundCue, Timing};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};

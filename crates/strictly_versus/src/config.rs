//! Runtime configuration: TOML file, then command-line overrides.

use crate::cli::Cli;
use crate::orchestrator::Timing;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_tictactoe::RandomChooser;
use tracing::{debug, info, instrument};

/// Game and front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct VersusConfig {
    /// Computer "thinking" delay in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Delay before a finished round is cleared, in milliseconds.
    #[serde(default = "default_restart_ms")]
    restart_ms: u64,

    /// Seed for the computer's tie-breaks; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Ring the terminal bell when a round ends.
    #[serde(default)]
    bell: bool,

    /// Log destination while the UI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_ms() -> u64 {
    600
}

fn default_restart_ms() -> u64 {
    2000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_versus.log")
}

impl Default for VersusConfig {
    fn default() -> Self {
        Self {
            think_ms: default_think_ms(),
            restart_ms: default_restart_ms(),
            seed: None,
            bell: false,
            log_file: default_log_file(),
        }
    }
}

impl VersusConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self, cli))]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(ms) = cli.think_ms {
            self.think_ms = ms;
        }
        if let Some(ms) = cli.restart_ms {
            self.restart_ms = ms;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.bell {
            self.bell = true;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        debug!(config = ?self, "Applied command-line overrides");
        self
    }

    /// Delays for the orchestrator.
    pub fn timing(&self) -> Timing {
        Timing {
            think: Duration::from_millis(self.think_ms),
            restart: Duration::from_millis(self.restart_ms),
        }
    }

    /// Tie-break source: seeded when a seed is configured.
    pub fn chooser(&self) -> RandomChooser {
        match self.seed {
            Some(seed) => {
                info!(seed, "Using seeded tie-breaks");
                RandomChooser::seeded(seed)
            }
            None => RandomChooser::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

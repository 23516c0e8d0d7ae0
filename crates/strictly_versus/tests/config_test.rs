//! Config file loading and command-line overrides.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use strictly_versus::{Cli, VersusConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = VersusConfig::load(dir.path().join("absent.toml")).expect("defaults");

    assert_eq!(config, VersusConfig::default());
    assert_eq!(*config.think_ms(), 600);
    assert_eq!(*config.restart_ms(), 2000);
    assert_eq!(*config.seed(), None);
    assert!(!*config.bell());
    assert_eq!(config.log_file(), &PathBuf::from("strictly_versus.log"));
}

#[test]
fn test_file_values_are_read() {
    let file = write_config(
        r#"
think_ms = 250
restart_ms = 1500
seed = 7
bell = true
log_file = "/tmp/versus.log"
"#,
    );
    let config = VersusConfig::load(file.path()).expect("parsed");

    assert_eq!(*config.think_ms(), 250);
    assert_eq!(*config.restart_ms(), 1500);
    assert_eq!(*config.seed(), Some(7));
    assert!(*config.bell());
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/versus.log"));

    let timing = config.timing();
    assert_eq!(timing.think, Duration::from_millis(250));
    assert_eq!(timing.restart, Duration::from_millis(1500));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("think_ms = 100\n");
    let config = VersusConfig::load(file.path()).expect("parsed");

    assert_eq!(*config.think_ms(), 100);
    assert_eq!(*config.restart_ms(), 2000);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("think_ms = \"soon\"\n");
    let err = VersusConfig::load(file.path()).expect_err("bad type");
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("think_ms = 250\nseed = 7\n");
    let cli = Cli::parse_from([
        "strictly_versus",
        "--think-ms",
        "10",
        "--restart-ms",
        "20",
        "--seed",
        "99",
        "--bell",
        "--log-file",
        "game.log",
    ]);
    let config = VersusConfig::load(file.path()).expect("parsed").with_cli(&cli);

    assert_eq!(*config.think_ms(), 10);
    assert_eq!(*config.restart_ms(), 20);
    assert_eq!(*config.seed(), Some(99));
    assert!(*config.bell());
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_absent_flags_leave_file_values() {
    let file = write_config("think_ms = 250\nseed = 7\nbell = true\n");
    let cli = Cli::parse_from(["strictly_versus"]);
    let config = VersusConfig::load(file.path()).expect("parsed").with_cli(&cli);

    assert_eq!(*config.think_ms(), 250);
    assert_eq!(*config.seed(), Some(7));
    assert!(*config.bell());
    assert_eq!(cli.config, PathBuf::from("strictly_versus.toml"));
}

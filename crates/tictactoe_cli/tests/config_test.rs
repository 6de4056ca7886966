//! Tests for loading configuration files from disk.

use std::io::Write;
use tictactoe::Mark;
use tictactoe_cli::GameConfig;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "computer_name = \"HAL\"\nhuman_mark = \"Naught\"\nlog_file = \"game.log\""
    )
    .unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.computer_name(), "HAL");
    assert_eq!(*config.human_mark(), Mark::Naught);
    assert!(*config.show_thinking());
    assert_eq!(
        config.log_file().as_deref(),
        Some(std::path::Path::new("game.log"))
    );

    let settings = config.settings();
    assert_eq!(settings.computer_name, "HAL");
    assert_eq!(settings.human_mark.opponent(), Mark::Cross);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_name = ").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

//! Tests for loading the TOML config.

use std::io::Write;
use tictactoe::AppConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
log_file = "game.log"
log_filter = "debug"

[rules]
allow_moves_after_game_over = true
"#
    )
    .expect("write config");

    let config = AppConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.show_cell_numbers());
    assert!(*config.rules().allow_moves_after_game_over());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_cell_numbers = \"yes\"").expect("write config");

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

//! Tests for loading configuration files.

use std::io::Write;
use tictactoe_console::GameConfig;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_guide = false").unwrap();
    writeln!(file, "log_filter = \"tictactoe_console=debug\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert!(!*config.show_guide());
    assert_eq!(config.log_filter(), "tictactoe_console=debug");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

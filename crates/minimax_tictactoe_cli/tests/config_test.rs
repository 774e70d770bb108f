//! Tests for play configuration loading.

use minimax_tictactoe_cli::{OpponentKind, PlayConfig, Side};
use std::io::Write;

#[test]
fn test_defaults() {
    let config = PlayConfig::load(None).unwrap();
    assert_eq!(*config.human(), Side::X);
    assert!(!*config.hints());
    assert_eq!(*config.opponent(), OpponentKind::Minimax);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"o\"\nhints = true\nopponent = \"first-available\"").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human(), Side::O);
    assert!(*config.hints());
    assert_eq!(*config.opponent(), OpponentKind::FirstAvailable);
}

#[test]
fn test_partial_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hints = true").unwrap();

    let config = PlayConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.human(), Side::X);
    assert_eq!(*config.opponent(), OpponentKind::Minimax);
}

#[test]
fn test_overrides_win_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"x\"").unwrap();

    let config = PlayConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(Side::O), true);
    assert_eq!(*config.human(), Side::O);
    assert!(*config.hints());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = PlayConfig::from_file("/nonexistent/play.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_value_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"z\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

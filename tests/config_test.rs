//! Tests for configuration loading and defaults.

use std::io::Write;
use strictly_guesser::GameConfig;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_match_classic_setup() {
    let config = GameConfig::default();
    assert_eq!(*config.min(), 1);
    assert_eq!(*config.max(), 100);
    assert_eq!(*config.max_guesses(), 4);
    assert_eq!(*config.max_hints(), 3);
    assert!(config.range().is_ok());
}

#[test]
fn test_load_from_toml_file() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "min = 1\nmax = 50\nmax_guesses = 6\nmax_hints = 2"
    )
    .expect("write config");

    let config = GameConfig::from_file(file.path()).expect("load config");
    assert_eq!(*config.max(), 50);
    assert_eq!(*config.max_guesses(), 6);
    assert_eq!(*config.max_hints(), 2);
}

#[test]
fn test_omitted_fields_use_defaults() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "max = 1000").expect("write config");

    let config = GameConfig::from_file(file.path()).expect("load config");
    assert_eq!(*config.min(), 1);
    assert_eq!(*config.max(), 1000);
    assert_eq!(*config.max_guesses(), 4);
}

#[test]
fn test_invalid_range_rejected_at_load() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "min = 50\nmax = 10").expect("write config");

    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_reports_error() {
    let result = GameConfig::from_file("/nonexistent/guesser.toml");
    let err = result.expect_err("missing file must fail");
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_reports_error() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "min = [not toml").expect("write config");

    let err = GameConfig::from_file(file.path()).expect_err("parse must fail");
    assert!(err.to_string().contains("Failed to parse config"));
}

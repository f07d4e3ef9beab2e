//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_mastermind::GameStartParams;
use strictly_mastermind_cli::MastermindConfig;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
code_set = [10, 20, 30, 40]
code_size = 3
max_tries = 6
seed = 7
"#,
    );

    let config = MastermindConfig::from_file(file.path()).unwrap();
    assert_eq!(config.code_set(), &vec![10, 20, 30, 40]);
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.start_params(), GameStartParams::new(3, 6));
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = MastermindConfig::load_or_default(&path).unwrap();
    assert_eq!(config, MastermindConfig::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MastermindConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let file = write_config("code_size = \"five\"");
    let err = MastermindConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_overrides_win_over_file() {
    let file = write_config("code_size = 4\nmax_tries = 10\n");
    let config = MastermindConfig::from_file(file.path())
        .unwrap()
        .with_overrides(None, Some(3), None);

    assert_eq!(config.start_params(), GameStartParams::new(4, 3));
}

#[test]
fn test_pool_smaller_than_code_fails_validation() {
    let file = write_config("code_set = [1, 2, 3]\ncode_size = 4\n");
    let config = MastermindConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}

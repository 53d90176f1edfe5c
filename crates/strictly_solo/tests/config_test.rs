//! Tests for loading configuration files.

use std::io::Write;
use strictly_minimax::Mark;
use strictly_solo::{FirstPlayer, SoloConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
first_player = "computer"
human_mark = "O"
sound_enabled = false
thinking_delay_min_ms = 0
thinking_delay_max_ms = 250
"#
    )
    .unwrap();

    let config = SoloConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(config.computer_mark(), Mark::X);
    assert!(!*config.sound_enabled());
    assert_eq!(*config.thinking_delay_max_ms(), 250);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SoloConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"nobody\"").unwrap();
    let err = SoloConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_inverted_delay_in_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "thinking_delay_min_ms = 10\nthinking_delay_max_ms = 5").unwrap();
    assert!(SoloConfig::from_file(file.path()).is_err());
}

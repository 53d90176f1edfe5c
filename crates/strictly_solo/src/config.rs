//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_minimax::Mark;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_solo.toml";

/// Which side places the first mark of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens every round.
    #[default]
    Human,
    /// The computer opens every round.
    Computer,
}

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoloConfig {
    /// Who moves first in each round.
    first_player: FirstPlayer,

    /// Mark used by the human; the computer takes the other one.
    human_mark: Mark,

    /// Whether sound cues start enabled.
    sound_enabled: bool,

    /// Shortest simulated thinking time for the computer, in milliseconds.
    thinking_delay_min_ms: u64,

    /// Longest simulated thinking time for the computer, in milliseconds.
    thinking_delay_max_ms: u64,

    /// File receiving logs while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for SoloConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            human_mark: Mark::X,
            sound_enabled: true,
            thinking_delay_min_ms: 1000,
            thinking_delay_max_ms: 2000,
            log_file: PathBuf::from("strictly_solo.log"),
        }
    }
}

impl SoloConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            first_player = ?config.first_player,
            human_mark = %config.human_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] when present,
    /// otherwise defaults.
    ///
    /// An explicit path must exist; the default file is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks cross-field constraints.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking_delay_min_ms > self.thinking_delay_max_ms {
            return Err(ConfigError::new(format!(
                "thinking_delay_min_ms ({}) exceeds thinking_delay_max_ms ({})",
                self.thinking_delay_min_ms, self.thinking_delay_max_ms
            )));
        }
        Ok(())
    }

    /// Mark used by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Overrides who moves first.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Removes the simulated thinking time.
    pub fn without_delay(mut self) -> Self {
        self.thinking_delay_min_ms = 0;
        self.thinking_delay_max_ms = 0;
        self
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SoloConfig::default();
        assert_eq!(*config.first_player(), FirstPlayer::Human);
        assert_eq!(*config.human_mark(), Mark::X);
        assert_eq!(config.computer_mark(), Mark::O);
        assert_eq!(*config.thinking_delay_min_ms(), 1000);
        assert_eq!(*config.thinking_delay_max_ms(), 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SoloConfig = toml::from_str("first_player = \"computer\"").unwrap();
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert!(*config.sound_enabled());
    }

    #[test]
    fn test_inverted_delay_rejected() {
        let config: SoloConfig =
            toml::from_str("thinking_delay_min_ms = 500\nthinking_delay_max_ms = 100").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("exceeds"));
    }

    #[test]
    fn test_without_delay() {
        let config = SoloConfig::default().without_delay();
        assert_eq!(*config.thinking_delay_max_ms(), 0);
    }
}

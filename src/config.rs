//! Game configuration: range bounds and budget limits.

use crate::range::{Range, RangeError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// Defaults match the classic setup: secret in [1, 100], four guesses,
/// three hints.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lower bound of the secret's range (inclusive).
    #[serde(default = "default_min")]
    min: i64,

    /// Upper bound of the secret's range (inclusive).
    #[serde(default = "default_max")]
    max: i64,

    /// Guess budget for the session.
    #[serde(default = "default_max_guesses")]
    max_guesses: u32,

    /// Hint budget for the session.
    #[serde(default = "default_max_hints")]
    max_hints: u32,
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    100
}

fn default_max_guesses() -> u32 {
    4
}

fn default_max_hints() -> u32 {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            max_guesses: default_max_guesses(),
            max_hints: default_max_hints(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with explicit bounds and budgets.
    #[instrument]
    pub fn new(min: i64, max: i64, max_guesses: u32, max_hints: u32) -> Self {
        Self {
            min,
            max,
            max_guesses,
            max_hints,
        }
    }

    /// Loads configuration from a TOML file, applying defaults for
    /// omitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// describes an invalid range.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .range()
            .map_err(|e| ConfigError::new(format!("Invalid range in config: {}", e)))?;

        info!(min = config.min, max = config.max, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the validated range the secret is drawn from.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvertedBounds`] when `min >= max`.
    pub fn range(&self) -> Result<Range, RangeError> {
        Range::new(self.min, self.max)
    }
}

/// Configuration error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
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

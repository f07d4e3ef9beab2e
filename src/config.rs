//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_mastermind::{GameStartParams, all_distinct};
use tracing::{debug, info, instrument};

/// Settings for a console session.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MastermindConfig {
    /// Pool of values secret codes are drawn from.
    #[serde(default = "default_code_set")]
    code_set: Vec<u32>,

    /// Length of the secret code.
    #[serde(default = "default_code_size")]
    code_size: usize,

    /// Guesses allowed per round.
    #[serde(default = "default_max_tries")]
    max_tries: usize,

    /// Fixed seed for reproducible codes; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_code_set() -> Vec<u32> {
    (1..=8).collect()
}

#[instrument]
fn default_code_size() -> usize {
    5
}

#[instrument]
fn default_max_tries() -> usize {
    8
}

impl Default for MastermindConfig {
    fn default() -> Self {
        Self {
            code_set: default_code_set(),
            code_size: default_code_size(),
            max_tries: default_max_tries(),
            seed: None,
        }
    }
}

impl MastermindConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            code_size = config.code_size,
            max_tries = config.max_tries,
            pool_size = config.code_set.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        code_size: Option<usize>,
        max_tries: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(code_size) = code_size {
            self.code_size = code_size;
        }
        if let Some(max_tries) = max_tries {
            self.max_tries = max_tries;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that the pool can supply codes of the configured size.
    ///
    /// Zero sizes and zero tries are left for the engine to reject.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !all_distinct(&self.code_set) {
            return Err(ConfigError::new("code_set values must be distinct"));
        }
        if self.code_size > self.code_set.len() {
            return Err(ConfigError::new(format!(
                "code_size {} exceeds the {} values in code_set",
                self.code_size,
                self.code_set.len()
            )));
        }
        Ok(())
    }

    /// Start parameters handed to the engine each round.
    pub fn start_params(&self) -> GameStartParams {
        GameStartParams::new(self.code_size, self.max_tries)
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

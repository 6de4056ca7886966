//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe::{Mark, Settings};
use tracing::{debug, info, instrument};

/// User-tunable settings; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Name shown for the computer player.
    computer_name: String,

    /// Mark for the human (`Cross` or `Naught`).
    human_mark: Mark,

    /// Print "<name> is thinking..." before computer moves.
    show_thinking: bool,

    /// Write logs to this file instead of stderr.
    log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            computer_name: settings.computer_name,
            human_mark: settings.human_mark,
            show_thinking: settings.show_thinking,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(computer_name = %config.computer_name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.computer_name.trim().is_empty() {
            return Err(ConfigError::new("computer_name must not be blank"));
        }
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Converts into the engine's game settings.
    pub fn settings(&self) -> Settings {
        Settings {
            computer_name: self.computer_name.clone(),
            human_mark: self.human_mark,
            show_thinking: self.show_thinking,
        }
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
    /// Creates a new config error with caller location tracking.
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

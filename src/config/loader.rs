use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{self, MessageList};
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/calm/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("calm").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Intervals are non-zero
    /// - The default pattern exists in the catalog
    /// - A message override is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.message_interval_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "message_interval_seconds must be greater than 0".to_string(),
            });
        }

        if self.display.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if let Err(err) = catalog::find_pattern(&self.display.default_pattern) {
            return Err(ConfigError::ValidationError {
                message: format!("default_pattern: {}", err),
            });
        }

        if matches!(&self.display.messages, Some(messages) if messages.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "messages must contain at least one entry".to_string(),
            });
        }

        Ok(())
    }

    /// The configured messages, or the built-in list.
    pub fn message_list(&self) -> MessageList {
        self.display
            .messages
            .clone()
            .and_then(MessageList::new)
            .unwrap_or_default()
    }
}

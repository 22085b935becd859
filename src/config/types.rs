use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What the widget shows and how often it moves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Seconds between message changes (default: 8).
    #[serde(default = "default_message_interval")]
    pub message_interval_seconds: u64,
    /// Redraw cadence in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Pattern selected at startup, by name or 1-based number.
    #[serde(default = "default_pattern")]
    pub default_pattern: String,
    /// Replaces the built-in messages when set.
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}

/// File logging. The terminal belongs to the UI, so there is no console sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log file path. Logging is off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter used when neither `CALM_LOG_LEVEL` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_message_interval() -> u64 {
    8
}

fn default_tick_rate() -> u64 {
    250
}

fn default_pattern() -> String {
    "Box Breathing".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            message_interval_seconds: default_message_interval(),
            tick_rate_ms: default_tick_rate(),
            default_pattern: default_pattern(),
            messages: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl DisplayConfig {
    pub fn message_interval(&self) -> Duration {
        Duration::from_secs(self.message_interval_seconds)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

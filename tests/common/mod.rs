//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use calm::catalog::MessageList;
use calm::session::{Session, DEFAULT_MESSAGE_INTERVAL};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Session mounted at t=0 with the built-in messages.
pub fn session_with_pattern(pattern: usize) -> Session {
    Session::new(
        MessageList::default(),
        DEFAULT_MESSAGE_INTERVAL,
        pattern,
        Duration::ZERO,
    )
}

/// Session over a short custom message list.
pub fn session_with_messages(messages: &[&str], interval: Duration) -> Session {
    let list = MessageList::new(messages.iter().map(|m| m.to_string()).collect())
        .expect("non-empty messages");
    Session::new(list, interval, 0, Duration::ZERO)
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable that overrides the log filter.
pub const LOG_LEVEL_ENV: &str = "CALM_LOG_LEVEL";

/// Initialize tracing with file output.
///
/// Logging is disabled unless a log file is configured, since anything
/// written to the terminal would corrupt the display. Returns whether a
/// subscriber was installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(true)
}

/// Open `path` for appending, creating it and its directory if needed.
///
/// Earlier runs and concurrent instances keep their lines.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// `CALM_LOG_LEVEL`, then `RUST_LOG`, then the configured level.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        let installed = init_tracing(&LoggingConfig::default()).expect("no error");
        assert!(!installed);
    }

    #[test]
    fn reopening_log_file_keeps_previous_runs() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("logs").join("calm.log");

        let mut first = open_log_file(&path).expect("first open");
        writeln!(first, "first run").expect("write");
        drop(first);

        let mut second = open_log_file(&path).expect("second open");
        writeln!(second, "second run").expect("write");
        drop(second);

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "first run\nsecond run\n");
    }
}

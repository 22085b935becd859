use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use calm::catalog::{self, find_pattern};
use calm::config::Config;
use calm::logging::init_tracing;
use calm::ui::runtime::{run, RunSettings};

/// A quiet corner of your terminal
///
/// Rotates motivational messages and guides a breathing exercise.
#[derive(Parser, Debug)]
#[command(name = "calm", version, about)]
struct Cli {
    /// Path to the config file (default: <config dir>/calm/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pattern to select at startup, by name or number (1-3)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Begin the breathing exercise immediately
    #[arg(long)]
    start: bool,

    /// Seconds between motivational messages
    #[arg(long, value_name = "SECONDS")]
    message_interval: Option<u64>,

    /// Print the available breathing patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    if cli.list_patterns {
        for line in catalog::pattern_listing() {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let pattern_query = cli
        .pattern
        .as_deref()
        .unwrap_or(&config.display.default_pattern);
    let pattern = match find_pattern(pattern_query) {
        Ok(index) => index,
        Err(err) => {
            eprintln!("Available patterns:");
            for line in catalog::pattern_listing() {
                eprintln!("  {}", line);
            }
            return Err(err.into());
        }
    };

    let message_interval = match cli.message_interval {
        Some(0) => bail!("--message-interval must be greater than 0"),
        Some(seconds) => Duration::from_secs(seconds),
        None => config.display.message_interval(),
    };

    init_tracing(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "calm starting");

    run(RunSettings {
        messages: config.message_list(),
        message_interval,
        tick_rate: config.display.tick_rate(),
        pattern,
        start_immediately: cli.start,
    })
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_pattern_and_start() {
        let cli = Cli::try_parse_from(["calm", "-p", "2", "--start"]).expect("valid args");
        assert_eq!(cli.pattern.as_deref(), Some("2"));
        assert!(cli.start);
        assert!(!cli.list_patterns);
    }

    #[test]
    fn message_interval_must_be_numeric() {
        assert!(Cli::try_parse_from(["calm", "--message-interval", "soon"]).is_err());
    }
}

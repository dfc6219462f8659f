//! Tracing setup
//!
//! The interactive session owns the terminal, so its logs go to a file (or
//! nowhere). Headless runs log to stderr, keeping stdout for the JSON.

use crate::config::expand_path;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`debug`, `routeline=trace`, ...)
pub const LOG_LEVEL_ENV_VAR: &str = "ROUTELINE_LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where log output goes
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Stderr,
    File(String),
    Disabled,
}

impl LogTarget {
    /// Pick the target for a run: an explicit file always wins, otherwise
    /// only headless runs log (to stderr)
    pub fn select(log_file: Option<&str>, headless: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_string()),
            None if headless => LogTarget::Stderr,
            None => LogTarget::Disabled,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global tracing subscriber
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(ChronoLocal::rfc_3339());

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let path = expand_path(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    tracing::debug!("Logging initialized ({:?})", target);
    Ok(())
}

//! `tracing` subscriber setup.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Output format of the log stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section shared by all binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `catalog=debug,info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Filter directive after applying `-v` flags on top of the configured level.
///
/// `-v` only ever raises verbosity: the result is the more verbose of the
/// configured level and the one `-v` asks for. A configured directive that is
/// not a plain level (e.g. `catalog=debug,info`) is kept as written.
#[must_use]
pub fn effective_level(cfg: &LoggingConfig, verbose: u8) -> &str {
    let (requested, name) = match verbose {
        0 => return cfg.level.as_str(),
        1 => (LevelFilter::INFO, "info"),
        2 => (LevelFilter::DEBUG, "debug"),
        _ => (LevelFilter::TRACE, "trace"),
    };

    match cfg.level.trim().parse::<LevelFilter>() {
        Ok(configured) if configured < requested => name,
        _ => cfg.level.as_str(),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG`, when set, wins over both the config and `-v`.
///
/// # Errors
/// Fails if a global subscriber is already installed or the directive is
/// malformed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(effective_level(cfg, verbose))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

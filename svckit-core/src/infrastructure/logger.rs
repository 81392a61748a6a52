//! Structured logging setup
//!
//! Builds a tracing subscriber that writes structured, UTC-timestamped
//! log lines to stdout. Services call [`init`] (or the [`Logger`] facade)
//! once at startup; repeated calls are ignored.

use crate::shared::constants::DEFAULT_LOG_LEVEL;
use std::sync::Once;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

static INIT: Once = Once::new();

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: true,
            ansi: false,
        }
    }
}

impl LogConfig {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }
}

fn level_for(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level. Only the first call takes
/// effect; later calls are no-ops so libraries and tests can call this
/// unconditionally.
pub fn init(config: &LogConfig) {
    INIT.call_once(|| {
        let level = level_for(&config.level);
        let env_filter = EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string().to_lowercase()),
        );

        if config.json {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stdout);
            Registry::default().with(env_filter).with(layer).init();
        } else {
            let layer = fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_target(true)
                .with_ansi(config.ansi)
                .with_writer(std::io::stdout);
            Registry::default().with(env_filter).with(layer).init();
        }
    });
}

/// Plain logging facade for services that do not use tracing spans
pub struct Logger;

impl Logger {
    pub fn init(log_level: &str) {
        init(&LogConfig::with_level(log_level));
    }

    pub fn info(message: &str) {
        info!("{}", message);
    }

    pub fn warn(message: &str) {
        warn!("{}", message);
    }

    /// Log an error message with the causing error attached as a field
    pub fn error(message: &str, err: &dyn std::error::Error) {
        error!(error = %err, "{}", message);
    }

    pub fn debug(message: &str) {
        debug!("{}", message);
    }
}

//! Logger setup
//!
//! Go-style simple logging: `[LEVEL] message`, written to stderr so the
//! generator never touches stdout.
//!
//! # Usage
//!
//! ```rust
//! use gen_error_map::util::logger;
//!
//! logger::init_with_level(logger::LogLevel::Debug);
//! tracing::debug!("scanning {}", "signon-errors.h");
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Initialize logger with custom level.
///
/// Does nothing if a global subscriber is already installed, so tests and
/// embedding build scripts may call it more than once.
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    // No time, no module path, no colors
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}

/// Initialize logger for CLI use (WARN level)
///
/// The command line has no verbosity switch, so only problems are reported.
pub fn init_cli() {
    init_with_level(LogLevel::Warn);
}

/// Initialize logger for debug use (DEBUG level)
pub fn init_debug() {
    init_with_level(LogLevel::Debug);
}

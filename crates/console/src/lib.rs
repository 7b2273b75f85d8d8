//! Smart Roadster Kiosk Console
//!
//! Turns polled console snapshots into the avatar panel view and drives
//! narration of display message changes.

pub mod config;
pub mod dispatch;
pub mod session;

pub use self::config::ConsoleConfig;
pub use session::{ConsoleSession, ConsoleView, GaugePanel, GaugeReading};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Console error types
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Logging already initialized")]
    LoggingInitialized,
}

/// Initialize logging to stderr (stdout carries the view stream)
pub fn init_logging(level: &str) -> Result<(), ConsoleError> {
    let level: Level = level
        .parse()
        .map_err(|_| ConsoleError::InvalidLogLevel(level.to_string()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| ConsoleError::LoggingInitialized)
}

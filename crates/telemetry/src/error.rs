//! Telemetry Error Types

use thiserror::Error;

/// Errors while reading a console snapshot
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Payload was not valid snapshot JSON
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload was empty or whitespace
    #[error("Empty snapshot payload")]
    Empty,
}

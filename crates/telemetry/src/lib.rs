//! Console Telemetry
//!
//! Snapshot types for one polled console frame, gauge ranges, and the
//! status labels shown beside each gauge.

mod error;
mod gauge;
mod snapshot;
mod status;

pub use error::TelemetryError;
pub use gauge::{Gauge, GaugeTone};
pub use snapshot::{BatteryData, ConsoleSnapshot, EngineData, LocationData, WeatherData};
pub use status::{battery_status, coolant_status};

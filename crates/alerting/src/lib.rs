//! Alerting System
//!
//! Generates system alerts from console telemetry and picks the one alert
//! that wins the display by severity.

mod alert;
mod generator;

pub use alert::{select_alert, AlertKind, AlertLevel, SystemAlert};
pub use generator::{battery_level, coolant_level, AlertGenerator, AlertThresholds};

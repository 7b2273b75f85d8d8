//! Console Snapshot
//!
//! One frame of console data as delivered by the polling backend.

use crate::TelemetryError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current vehicle position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Local weather at the vehicle position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    /// Air temperature (°C)
    pub temperature: f64,
    pub condition: String,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Rain expected soon
    pub rain_alert: bool,
}

/// Engine readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineData {
    pub rpm: f64,
    /// Coolant temperature (°C)
    pub temperature: f64,
}

/// Battery readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryData {
    /// Terminal voltage (V)
    pub voltage: f64,
    /// State of charge (0-100 %)
    pub charge_level: f64,
}

/// Full console frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleSnapshot {
    pub location: LocationData,
    pub weather: WeatherData,
    pub engine: EngineData,
    pub battery: BatteryData,
    /// ISO-8601 timestamp assigned by the backend
    pub timestamp: String,
}

impl ConsoleSnapshot {
    /// Parse a snapshot from a JSON payload
    pub fn from_json(payload: &str) -> Result<Self, TelemetryError> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(TelemetryError::Empty);
        }

        let snapshot: Self = serde_json::from_str(payload)?;
        debug!(
            "Snapshot {}: rpm={} coolant={} battery={}",
            snapshot.timestamp,
            snapshot.engine.rpm,
            snapshot.engine.temperature,
            snapshot.battery.voltage
        );
        Ok(snapshot)
    }
}

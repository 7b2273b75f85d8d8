//! Alert Generator Implementation

use crate::{AlertKind, AlertLevel, SystemAlert};
use serde::{Deserialize, Serialize};
use telemetry::{ConsoleSnapshot, Gauge};
use tracing::{debug, info};

const COOLANT_DANGER_MESSAGE: &str = "水温が危険レベルなのだ！すぐに停車するのだ！";
const COOLANT_WARNING_MESSAGE: &str = "水温が高めなのだ。注意が必要なのだ。";
const BATTERY_DANGER_MESSAGE: &str = "バッテリーが危険なのだ！交換が必要なのだ！";
const BATTERY_WARNING_MESSAGE: &str = "バッテリーが弱ってるのだ。要注意なのだ。";
const RAIN_MESSAGE: &str = "雨が近づいてるのだ！屋根を閉めるのだ！";

/// Alert thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Coolant warning temperature (default: 95 °C)
    pub coolant_warning: f64,
    /// Coolant danger temperature (default: 100 °C)
    pub coolant_danger: f64,
    /// Battery warning voltage, alert below (default: 12.5 V)
    pub battery_warning: f64,
    /// Battery danger voltage, alert below (default: 12.0 V)
    pub battery_danger: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            coolant_warning: 95.0,
            coolant_danger: 100.0,
            battery_warning: 12.5,
            battery_danger: 12.0,
        }
    }
}

impl AlertThresholds {
    /// Level for a coolant temperature
    pub fn coolant_level(&self, temperature: f64) -> AlertLevel {
        if temperature >= self.coolant_danger {
            AlertLevel::Danger
        } else if temperature >= self.coolant_warning {
            AlertLevel::Warning
        } else {
            AlertLevel::Normal
        }
    }

    /// Level for a battery voltage
    pub fn battery_level(&self, voltage: f64) -> AlertLevel {
        if voltage < self.battery_danger {
            AlertLevel::Danger
        } else if voltage < self.battery_warning {
            AlertLevel::Warning
        } else {
            AlertLevel::Normal
        }
    }

    /// Coolant gauge coloured at these thresholds
    pub fn coolant_gauge(&self) -> Gauge {
        Gauge::coolant().with_thresholds(self.coolant_warning, self.coolant_danger)
    }

    /// Battery gauge coloured at these thresholds
    pub fn battery_gauge(&self) -> Gauge {
        Gauge::battery().with_thresholds(self.battery_warning, self.battery_danger)
    }
}

/// Coolant card level with default thresholds
pub fn coolant_level(temperature: f64) -> AlertLevel {
    AlertThresholds::default().coolant_level(temperature)
}

/// Battery card level with default thresholds
pub fn battery_level(voltage: f64) -> AlertLevel {
    AlertThresholds::default().battery_level(voltage)
}

/// Builds the per-cycle alert list from a console snapshot
#[derive(Debug, Clone, Default)]
pub struct AlertGenerator {
    thresholds: AlertThresholds,
}

impl AlertGenerator {
    /// Create a new alert generator
    pub fn new(thresholds: AlertThresholds) -> Self {
        info!("Creating alert generator with thresholds: {:?}", thresholds);
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Alerts for one snapshot, in coolant, battery, weather order
    pub fn generate(&self, snapshot: &ConsoleSnapshot) -> Vec<SystemAlert> {
        let mut alerts = Vec::new();

        match self.thresholds.coolant_level(snapshot.engine.temperature) {
            AlertLevel::Danger => alerts.push(SystemAlert::new(
                AlertLevel::Danger,
                AlertKind::Temperature,
                COOLANT_DANGER_MESSAGE,
            )),
            AlertLevel::Warning => alerts.push(SystemAlert::new(
                AlertLevel::Warning,
                AlertKind::Temperature,
                COOLANT_WARNING_MESSAGE,
            )),
            AlertLevel::Normal => {}
        }

        match self.thresholds.battery_level(snapshot.battery.voltage) {
            AlertLevel::Danger => alerts.push(SystemAlert::new(
                AlertLevel::Danger,
                AlertKind::Battery,
                BATTERY_DANGER_MESSAGE,
            )),
            AlertLevel::Warning => alerts.push(SystemAlert::new(
                AlertLevel::Warning,
                AlertKind::Battery,
                BATTERY_WARNING_MESSAGE,
            )),
            AlertLevel::Normal => {}
        }

        if snapshot.weather.rain_alert {
            alerts.push(SystemAlert::new(
                AlertLevel::Warning,
                AlertKind::Weather,
                RAIN_MESSAGE,
            ));
        }

        debug!("Generated {} alerts for {}", alerts.len(), snapshot.timestamp);
        alerts
    }
}

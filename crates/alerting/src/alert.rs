//! System Alert Types

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Alert severity, ordered `Normal < Warning < Danger`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle subsystem an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Temperature,
    Battery,
    Weather,
    Rpm,
}

/// Transient vehicle condition that needs the driver's attention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAlert {
    pub level: AlertLevel,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
}

impl SystemAlert {
    /// Create a new alert
    pub fn new(level: AlertLevel, kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            kind,
        }
    }
}

/// Pick the alert that wins the display.
///
/// Highest level wins; among equal levels the earliest in `alerts` wins.
pub fn select_alert(alerts: &[SystemAlert]) -> Option<&SystemAlert> {
    // min_by_key keeps the first of equal keys
    alerts.iter().min_by_key(|alert| Reverse(alert.level))
}

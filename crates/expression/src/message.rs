//! Display message resolution

use crate::band::{classify_band, RpmBand};
use alerting::{select_alert, AlertLevel, SystemAlert};
use serde::{Serialize, Serializer};

/// Styling of the speech bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTone {
    /// A danger alert holds the bubble
    Danger,
    /// A warning alert holds the bubble
    Warning,
    /// RPM band styling
    Band(RpmBand),
}

impl DisplayTone {
    /// Style class consumed by the view layer
    pub fn class_name(&self) -> &'static str {
        match self {
            DisplayTone::Danger => "rpm-status-danger",
            DisplayTone::Warning => "rpm-status-warning",
            DisplayTone::Band(RpmBand::Idle) => "rpm-status-idle",
            DisplayTone::Band(RpmBand::Normal) => "rpm-status-normal",
            DisplayTone::Band(RpmBand::Active) => "rpm-status-active",
            DisplayTone::Band(RpmBand::High) => "rpm-status-high",
        }
    }
}

impl Serialize for DisplayTone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class_name())
    }
}

/// Message plus bubble styling for one cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDisplay {
    pub message: String,
    pub tone: DisplayTone,
}

/// Message and styling: the winning alert if any, otherwise the RPM band.
pub fn resolve_display(rpm: f64, alerts: &[SystemAlert]) -> ResolvedDisplay {
    let band = classify_band(rpm);

    match select_alert(alerts) {
        Some(alert) => ResolvedDisplay {
            message: alert.message.clone(),
            tone: match alert.level {
                AlertLevel::Danger => DisplayTone::Danger,
                AlertLevel::Warning => DisplayTone::Warning,
                AlertLevel::Normal => DisplayTone::Band(band),
            },
        },
        None => ResolvedDisplay {
            message: band.default_message().to_string(),
            tone: DisplayTone::Band(band),
        },
    }
}

/// Message surfaced to the driver and to narration
pub fn resolve_message(rpm: f64, alerts: &[SystemAlert]) -> String {
    resolve_display(rpm, alerts).message
}

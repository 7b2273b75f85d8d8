//! Gauge Ranges
//!
//! Display range and warning/danger thresholds for each console gauge.

use serde::{Deserialize, Serialize};

/// Colour band of a gauge reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeTone {
    #[default]
    Normal,
    Warning,
    Danger,
}

/// Gauge configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Lower end of the bar
    pub min: f64,
    /// Upper end of the bar
    pub max: f64,
    /// Warning threshold
    pub warning: f64,
    /// Danger threshold
    pub danger: f64,
    /// Low readings are the dangerous side
    #[serde(default)]
    pub low_side: bool,
}

impl Gauge {
    /// Coolant temperature gauge (°C)
    pub fn coolant() -> Self {
        Self {
            min: 60.0,
            max: 120.0,
            warning: 95.0,
            danger: 100.0,
            low_side: false,
        }
    }

    /// Engine speed gauge (RPM)
    pub fn rpm() -> Self {
        Self {
            min: 0.0,
            max: 7000.0,
            warning: 5000.0,
            danger: 6000.0,
            low_side: false,
        }
    }

    /// Battery voltage gauge (V), low readings are bad
    pub fn battery() -> Self {
        Self {
            min: 10.0,
            max: 15.0,
            warning: 12.5,
            danger: 12.0,
            low_side: true,
        }
    }

    /// Same range with different warning/danger thresholds
    pub fn with_thresholds(self, warning: f64, danger: f64) -> Self {
        Self {
            warning,
            danger,
            ..self
        }
    }

    /// Whether low readings are the dangerous side
    pub fn is_low_side(&self) -> bool {
        self.low_side
    }

    /// Bar fill in percent, clamped to [0, 100]
    pub fn fill_percent(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }

        let percent = (value - self.min) / range * 100.0;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }

    /// Colour band for a reading
    pub fn tone(&self, value: f64) -> GaugeTone {
        if self.is_low_side() {
            if value < self.danger {
                GaugeTone::Danger
            } else if value < self.warning {
                GaugeTone::Warning
            } else {
                GaugeTone::Normal
            }
        } else if value >= self.danger {
            GaugeTone::Danger
        } else if value >= self.warning {
            GaugeTone::Warning
        } else {
            GaugeTone::Normal
        }
    }
}

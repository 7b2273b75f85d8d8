//! Status labels shown next to the console gauges
//!
//! Labels follow the gauge tone, so they move with whatever thresholds the
//! gauge was built with.

use crate::GaugeTone;

/// Coolant state label
pub fn coolant_status(tone: GaugeTone) -> &'static str {
    match tone {
        GaugeTone::Normal => "正常",
        GaugeTone::Warning => "警告",
        GaugeTone::Danger => "危険",
    }
}

/// Battery state label
pub fn battery_status(tone: GaugeTone) -> &'static str {
    match tone {
        GaugeTone::Normal => "良好",
        GaugeTone::Warning => "要注意",
        GaugeTone::Danger => "要交換",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gauge;

    #[test]
    fn test_coolant_status() {
        let gauge = Gauge::coolant();
        assert_eq!(coolant_status(gauge.tone(90.0)), "正常");
        assert_eq!(coolant_status(gauge.tone(95.0)), "警告");
        assert_eq!(coolant_status(gauge.tone(100.0)), "危険");
    }

    #[test]
    fn test_battery_status() {
        let gauge = Gauge::battery();
        assert_eq!(battery_status(gauge.tone(13.0)), "良好");
        assert_eq!(battery_status(gauge.tone(12.2)), "要注意");
        assert_eq!(battery_status(gauge.tone(11.8)), "要交換");
    }

    #[test]
    fn test_status_follows_custom_thresholds() {
        let gauge = Gauge::coolant().with_thresholds(90.0, 100.0);
        assert_eq!(coolant_status(gauge.tone(92.0)), "警告");
    }
}

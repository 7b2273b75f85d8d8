//! Console Session Implementation

use crate::ConsoleConfig;
use alerting::{AlertGenerator, AlertLevel, SystemAlert};
use expression::{
    classify, stage_mandan, DisplayTone, ExpressionDescriptor, MandanProvider, MandanStage,
    NarrationSink, Narrator, RpmBand,
};
use rand::Rng;
use serde::Serialize;
use telemetry::{battery_status, coolant_status, ConsoleSnapshot, Gauge, GaugeTone};
use tracing::{debug, info};

/// One gauge card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    pub value: f64,
    pub fill_percent: f64,
    pub tone: GaugeTone,
    pub status: &'static str,
    /// Card frame tint
    pub card_level: AlertLevel,
}

/// The three gauge cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugePanel {
    pub coolant: GaugeReading,
    pub rpm: GaugeReading,
    pub battery: GaugeReading,
}

/// Everything the kiosk renders for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleView {
    pub timestamp: String,
    pub band: RpmBand,
    pub expression: ExpressionDescriptor,
    pub avatar_url: String,
    pub message: String,
    pub tone: DisplayTone,
    pub alerts: Vec<SystemAlert>,
    pub gauges: GaugePanel,
    /// Narration fired this cycle
    pub narrated: bool,
}

/// Per-display evaluation state.
///
/// Sessions share nothing; the only state carried between cycles is the
/// narrator's last message.
pub struct ConsoleSession<S> {
    generator: AlertGenerator,
    narrator: Narrator<S>,
    narrate: bool,
    speaker: u32,
    mandan_provider: MandanProvider,
    cycles: u64,
}

impl<S: NarrationSink> ConsoleSession<S> {
    /// Create a new session
    pub fn new(config: &ConsoleConfig, sink: S) -> Self {
        info!(
            "Creating console session (speaker {}, cache {:?}, narrate {})",
            config.speaker, config.cache, config.narrate
        );
        Self {
            generator: AlertGenerator::new(config.thresholds.clone()),
            narrator: Narrator::with_voice(sink, config.speaker, config.cache),
            narrate: config.narrate,
            speaker: config.speaker,
            mandan_provider: config.mandan_provider,
            cycles: 0,
        }
    }

    /// Evaluate one snapshot
    pub fn evaluate(&mut self, snapshot: &ConsoleSnapshot) -> ConsoleView {
        self.cycles += 1;

        let alerts = self.generator.generate(snapshot);
        let classification = classify(snapshot.engine.rpm, &alerts);
        debug!(
            "Cycle {}: rpm={} band={} alerts={}",
            self.cycles,
            snapshot.engine.rpm,
            classification.band,
            alerts.len()
        );

        let narrated = self.narrate && self.narrator.observe(&classification.message);

        ConsoleView {
            timestamp: snapshot.timestamp.clone(),
            band: classification.band,
            expression: classification.expression,
            avatar_url: classification.avatar_url,
            message: classification.message,
            tone: classification.tone,
            gauges: self.gauges(snapshot, classification.band),
            alerts,
            narrated,
        }
    }

    fn gauges(&self, snapshot: &ConsoleSnapshot, band: RpmBand) -> GaugePanel {
        let thresholds = self.generator.thresholds();
        let coolant = thresholds.coolant_gauge();
        let rpm = Gauge::rpm();
        let battery = thresholds.battery_gauge();

        let coolant_tone = coolant.tone(snapshot.engine.temperature);
        let battery_tone = battery.tone(snapshot.battery.voltage);

        GaugePanel {
            coolant: GaugeReading {
                value: snapshot.engine.temperature,
                fill_percent: coolant.fill_percent(snapshot.engine.temperature),
                tone: coolant_tone,
                status: coolant_status(coolant_tone),
                card_level: thresholds.coolant_level(snapshot.engine.temperature),
            },
            rpm: GaugeReading {
                value: snapshot.engine.rpm,
                fill_percent: rpm.fill_percent(snapshot.engine.rpm),
                tone: rpm.tone(snapshot.engine.rpm),
                status: band.status_label(),
                card_level: AlertLevel::Normal,
            },
            battery: GaugeReading {
                value: snapshot.battery.voltage,
                fill_percent: battery.fill_percent(snapshot.battery.voltage),
                tone: battery_tone,
                status: battery_status(battery_tone),
                card_level: thresholds.battery_level(snapshot.battery.voltage),
            },
        }
    }

    /// Random idle pose and routine request for one mandan round
    pub fn mandan_stage<R: Rng + ?Sized>(&self, rng: &mut R) -> MandanStage {
        stage_mandan(self.mandan_provider, self.speaker, rng)
    }

    /// Forget the last narrated message (e.g. after a mode switch)
    pub fn reset_narration(&mut self) {
        self.narrator.reset();
    }

    /// Number of evaluated snapshots
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerting::AlertThresholds;
    use expression::{parse_resource_locator, NarrationRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snapshot(rpm: f64) -> ConsoleSnapshot {
        let mut snapshot = ConsoleSnapshot::default();
        snapshot.engine.rpm = rpm;
        snapshot.engine.temperature = 88.0;
        snapshot.battery.voltage = 13.4;
        snapshot
    }

    #[test]
    fn test_view_without_alerts() {
        let mut session = ConsoleSession::new(&ConsoleConfig::default(), |_r: NarrationRequest| {});
        let view = session.evaluate(&snapshot(3600.0));

        assert_eq!(view.band, RpmBand::Active);
        assert_eq!(view.message, "活発に走ってるのだ！");
        assert!(view.alerts.is_empty());
        assert_eq!(view.gauges.rpm.status, "活発走行");
        assert_eq!(view.gauges.battery.card_level, AlertLevel::Normal);
        assert!(view.narrated);
        assert_eq!(session.cycles(), 1);
    }

    #[test]
    fn test_silent_session_never_narrates() {
        let mut count = 0;
        {
            let mut session = ConsoleSession::new(&ConsoleConfig::silent(), |_r: NarrationRequest| {
                count += 1
            });
            assert!(!session.evaluate(&snapshot(800.0)).narrated);
            assert!(!session.evaluate(&snapshot(5000.0)).narrated);
        }
        assert_eq!(count, 0);
    }

    #[test]
    fn test_reset_narration() {
        let mut session = ConsoleSession::new(&ConsoleConfig::default(), |_r: NarrationRequest| {});
        assert!(session.evaluate(&snapshot(800.0)).narrated);
        assert!(!session.evaluate(&snapshot(900.0)).narrated);
        session.reset_narration();
        assert!(session.evaluate(&snapshot(900.0)).narrated);
    }

    #[test]
    fn test_gauges_follow_configured_thresholds() {
        let config = ConsoleConfig {
            thresholds: AlertThresholds {
                coolant_warning: 90.0,
                battery_warning: 12.8,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut session = ConsoleSession::new(&config, |_r: NarrationRequest| {});

        let mut frame = snapshot(2000.0);
        frame.engine.temperature = 92.0;
        frame.battery.voltage = 12.6;
        let view = session.evaluate(&frame);

        assert_eq!(view.message, "水温が高めなのだ。注意が必要なのだ。");
        assert_eq!(view.gauges.coolant.card_level, AlertLevel::Warning);
        assert_eq!(view.gauges.coolant.tone, GaugeTone::Warning);
        assert_eq!(view.gauges.coolant.status, "警告");
        assert_eq!(view.gauges.battery.card_level, AlertLevel::Warning);
        assert_eq!(view.gauges.battery.tone, GaugeTone::Warning);
        assert_eq!(view.gauges.battery.status, "要注意");
    }

    #[test]
    fn test_non_finite_rpm_reads_idle() {
        let mut session = ConsoleSession::new(&ConsoleConfig::silent(), |_r: NarrationRequest| {});
        for rpm in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let view = session.evaluate(&snapshot(rpm));
            assert_eq!(view.band, RpmBand::Idle);
            assert_eq!(view.gauges.rpm.status, "アイドリング");
        }
    }

    #[test]
    fn test_mandan_stage_uses_config() {
        let config = ConsoleConfig {
            speaker: 1,
            mandan_provider: MandanProvider::Claude,
            ..Default::default()
        };
        let session = ConsoleSession::new(&config, |_r: NarrationRequest| {});
        let stage = session.mandan_stage(&mut StdRng::seed_from_u64(5));

        assert_eq!(stage.request.speaker, 1);
        assert_eq!(stage.request.provider, MandanProvider::Claude);
        assert_eq!(stage.request.maxlength, 100);
        assert_eq!(stage.request.model, None);
        assert_eq!(parse_resource_locator(&stage.avatar_url).unwrap(), stage.expression);
    }
}

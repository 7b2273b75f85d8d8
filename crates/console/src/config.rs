//! Console configuration

use crate::ConsoleError;
use alerting::AlertThresholds;
use expression::{CachePolicy, MandanProvider, DEFAULT_SPEAKER};
use serde::{Deserialize, Serialize};

/// Console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Speech synthesizer voice id
    pub speaker: u32,

    /// Synthesizer cache hint
    pub cache: CachePolicy,

    /// Narrate display message changes
    pub narrate: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Pending narration requests before new ones are dropped
    pub channel_capacity: usize,

    /// Alert thresholds
    pub thresholds: AlertThresholds,

    /// Text generation backend for mandan mode
    pub mandan_provider: MandanProvider,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            speaker: DEFAULT_SPEAKER,
            cache: CachePolicy::Use,
            narrate: true,
            log_level: "info".to_string(),
            channel_capacity: 16,
            thresholds: AlertThresholds::default(),
            mandan_provider: MandanProvider::Ollama,
        }
    }
}

impl ConsoleConfig {
    /// Display only, no speech
    pub fn silent() -> Self {
        Self {
            narrate: false,
            ..Default::default()
        }
    }

    /// Load from an optional config file plus `KIOSK_*` environment variables.
    ///
    /// Nested keys use a double underscore, e.g.
    /// `KIOSK_THRESHOLDS__COOLANT_WARNING=92`.
    pub fn load(path: &str) -> Result<Self, ConsoleError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("KIOSK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

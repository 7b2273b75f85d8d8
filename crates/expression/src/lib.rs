//! Expression Classifier
//!
//! Maps engine RPM and the active system alerts onto the mascot avatar:
//! - RPM band classification
//! - Fixed pose/expression descriptor per band
//! - Display message chosen by alert priority
//! - Avatar resource locator for the image endpoint
//! - Edge-triggered narration of the display message
//! - Random idle pose and topic for the stand-up comedy mode

pub mod band;
pub mod locator;
pub mod mandan;
pub mod message;
pub mod narration;
pub mod pose;

pub use alerting::{select_alert, AlertKind, AlertLevel, SystemAlert};
pub use band::{classify_band, expression_for, RpmBand};
pub use locator::{build_resource_locator, parse_resource_locator, RESOURCE_BASE_PATH};
pub use mandan::{stage_mandan, MandanProvider, MandanRequest, MandanStage, MANDAN_MAX_LENGTH};
pub use message::{resolve_display, resolve_message, DisplayTone, ResolvedDisplay};
pub use narration::{
    CachePolicy, NarrationPriority, NarrationRequest, NarrationSink, Narrator, DEFAULT_SPEAKER,
};
pub use pose::{ExpressionDescriptor, PoseError};

use serde::Serialize;

/// Everything the avatar panel needs for one evaluation cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub band: RpmBand,
    pub expression: ExpressionDescriptor,
    pub avatar_url: String,
    pub message: String,
    pub tone: DisplayTone,
}

/// Classify one cycle of RPM and alerts
pub fn classify(rpm: f64, alerts: &[SystemAlert]) -> Classification {
    let band = classify_band(rpm);
    let expression = expression_for(band);
    let display = resolve_display(rpm, alerts);

    Classification {
        band,
        avatar_url: build_resource_locator(&expression),
        expression,
        message: display.message,
        tone: display.tone,
    }
}

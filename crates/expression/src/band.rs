//! RPM bands and the fixed pose for each band

use crate::pose::{
    Edamame, ExpressionDescriptor, Eyebrows, Eyes, FaceColor, HeadDirection, LeftArm, Mouth,
    RightArm,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the normal band
pub const NORMAL_RPM: f64 = 1500.0;
/// Lower bound of the active band
pub const ACTIVE_RPM: f64 = 3000.0;
/// Lower bound of the high band
pub const HIGH_RPM: f64 = 4500.0;

/// Engine activity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpmBand {
    /// rpm < 1500
    Idle,
    /// 1500 <= rpm < 3000
    Normal,
    /// 3000 <= rpm < 4500
    Active,
    /// rpm >= 4500
    High,
}

impl RpmBand {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RpmBand::Idle => "idle",
            RpmBand::Normal => "normal",
            RpmBand::Active => "active",
            RpmBand::High => "high",
        }
    }

    /// Message shown and narrated when no alert is active
    pub fn default_message(&self) -> &'static str {
        match self {
            RpmBand::Idle => "アイドリング中なのだ",
            RpmBand::Normal => "通常走行中なのだ",
            RpmBand::Active => "活発に走ってるのだ！",
            RpmBand::High => "高回転で興奮してるのだ！！",
        }
    }

    /// Label beside the RPM gauge
    pub fn status_label(&self) -> &'static str {
        match self {
            RpmBand::Idle => "アイドリング",
            RpmBand::Normal => "通常走行",
            RpmBand::Active => "活発走行",
            RpmBand::High => "高回転",
        }
    }

    /// Avatar pose for this band
    pub fn expression(&self) -> ExpressionDescriptor {
        match self {
            RpmBand::Idle => ExpressionDescriptor {
                head_direction: HeadDirection::Front,
                right_arm: RightArm::Hip,
                left_arm: LeftArm::Hip,
                edamame: Edamame::Normal,
                face_color: FaceColor::CheeksBasic,
                expression_mouth: Mouth::Smile,
                expression_eyes: Eyes::Gentle,
                expression_eyebrows: Eyebrows::Basic,
            },
            RpmBand::Normal => ExpressionDescriptor {
                head_direction: HeadDirection::Front,
                right_arm: RightArm::Basic,
                left_arm: LeftArm::Basic,
                edamame: Edamame::Normal,
                face_color: FaceColor::CheeksBasic,
                expression_mouth: Mouth::Ehe,
                expression_eyes: Eyes::Basic,
                expression_eyebrows: Eyebrows::Basic,
            },
            RpmBand::Active => ExpressionDescriptor {
                head_direction: HeadDirection::Front,
                right_arm: RightArm::Raised,
                left_arm: LeftArm::Raised,
                edamame: Edamame::Standing,
                face_color: FaceColor::CheeksRed,
                expression_mouth: Mouth::Aha,
                expression_eyes: Eyes::Beaming,
                expression_eyebrows: Eyebrows::Raised,
            },
            RpmBand::High => ExpressionDescriptor {
                head_direction: HeadDirection::Up,
                right_arm: RightArm::PointUp,
                left_arm: LeftArm::Raised,
                edamame: Edamame::Standing,
                face_color: FaceColor::Blushing,
                expression_mouth: Mouth::O,
                expression_eyes: Eyes::Wide,
                expression_eyebrows: Eyebrows::Raised,
            },
        }
    }
}

impl fmt::Display for RpmBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an RPM reading.
///
/// Input is not range checked. Negative readings fall into `Idle`, and so
/// does any non-finite reading (NaN or either infinity).
pub fn classify_band(rpm: f64) -> RpmBand {
    if !rpm.is_finite() {
        return RpmBand::Idle;
    }

    if rpm >= HIGH_RPM {
        RpmBand::High
    } else if rpm >= ACTIVE_RPM {
        RpmBand::Active
    } else if rpm >= NORMAL_RPM {
        RpmBand::Normal
    } else {
        RpmBand::Idle
    }
}

/// Avatar pose for a band
pub fn expression_for(band: RpmBand) -> ExpressionDescriptor {
    band.expression()
}

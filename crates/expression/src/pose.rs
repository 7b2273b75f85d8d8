//! Avatar pose catalog
//!
//! Each descriptor attribute is a closed set of layer labels understood by
//! the avatar renderer. Labels are the exact strings the renderer expects.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pose parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoseError {
    #[error("Unknown label {label:?} for {key}")]
    UnknownLabel { key: &'static str, label: String },

    #[error("Unknown pose parameter: {0}")]
    UnknownKey(String),

    #[error("Pose parameter given twice: {0}")]
    DuplicateKey(String),

    #[error("Missing pose parameter: {0}")]
    MissingKey(&'static str),

    #[error("Malformed locator: {0}")]
    MalformedLocator(String),
}

macro_rules! pose_attribute {
    (
        $(#[$meta:meta])*
        $name:ident = $key:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Query parameter name
            pub const KEY: &'static str = $key;

            /// Full catalog in renderer order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Renderer layer label
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self::ALL[rng.gen_range(0..Self::ALL.len())]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PoseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(PoseError::UnknownLabel {
                        key: $key,
                        label: other.to_string(),
                    }),
                }
            }
        }
    };
}

pose_attribute! {
    /// Head orientation
    HeadDirection = "head_direction" {
        Front => "正面向き",
        Up => "上向き",
    }
}

pose_attribute! {
    /// Right arm pose
    RightArm = "right_arm" {
        Hip => "腰",
        PointSide => "指差し横",
        Raised => "手を挙げる",
        Basic => "基本",
        Side => "横",
        PointUp => "指差し上",
    }
}

pose_attribute! {
    /// Left arm pose
    LeftArm = "left_arm" {
        Hip => "腰",
        Side => "横",
        Raised => "手を挙げる",
        Basic => "基本",
        FingerOnChin => "あごに指",
        HandToMouth => "口元",
    }
}

pose_attribute! {
    /// Edamame accessory state
    Edamame = "edamame" {
        Normal => "通常",
        Standing => "立ち",
        Wilted => "萎え",
        StandingHalfBent => "立ち片折れ",
    }
}

pose_attribute! {
    /// Cheek colour / blush
    FaceColor = "face_color" {
        CheeksBasic => "ほっぺ基本",
        CheeksRed => "ほっぺ赤め",
        Blushing => "赤面",
        Pale => "青ざめ",
        Hidden => "非表示",
    }
}

pose_attribute! {
    /// Mouth shape
    Mouth = "expression_mouth" {
        Hou => "ほう",
        Aha => "あは",
        Smile => "ほほえみ",
        Ehe => "えへ",
        Smirk => "にやり",
        Mufu => "むふ",
        O => "お",
        N => "ん",
    }
}

pose_attribute! {
    /// Eye shape
    Eyes = "expression_eyes" {
        Basic => "基本目",
        Beaming => "にっこり",
        Happy => "^^",
        Gentle => "なごみ目",
        Closed => "閉じ目",
        Squint => "ジト目",
        Wide => "〇〇",
    }
}

pose_attribute! {
    /// Eyebrow shape
    Eyebrows = "expression_eyebrows" {
        Basic => "基本眉",
        Angry => "怒り眉",
        Troubled => "困り眉",
        Raised => "上がり眉",
        AngryAlt => "怒り眉2",
    }
}

/// Canonical parameter order
pub const PARAMETER_KEYS: [&str; 8] = [
    HeadDirection::KEY,
    RightArm::KEY,
    LeftArm::KEY,
    Edamame::KEY,
    FaceColor::KEY,
    Mouth::KEY,
    Eyes::KEY,
    Eyebrows::KEY,
];

/// Full avatar pose, one label per layer group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpressionDescriptor {
    pub head_direction: HeadDirection,
    pub right_arm: RightArm,
    pub left_arm: LeftArm,
    pub edamame: Edamame,
    pub face_color: FaceColor,
    pub expression_mouth: Mouth,
    pub expression_eyes: Eyes,
    pub expression_eyebrows: Eyebrows,
}

impl ExpressionDescriptor {
    /// Parameter pairs in canonical order
    pub fn query_pairs(&self) -> [(&'static str, &'static str); 8] {
        [
            (HeadDirection::KEY, self.head_direction.as_str()),
            (RightArm::KEY, self.right_arm.as_str()),
            (LeftArm::KEY, self.left_arm.as_str()),
            (Edamame::KEY, self.edamame.as_str()),
            (FaceColor::KEY, self.face_color.as_str()),
            (Mouth::KEY, self.expression_mouth.as_str()),
            (Eyes::KEY, self.expression_eyes.as_str()),
            (Eyebrows::KEY, self.expression_eyebrows.as_str()),
        ]
    }

    /// Uniformly random pose, used while no band drives the avatar
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            head_direction: HeadDirection::choose(rng),
            right_arm: RightArm::choose(rng),
            left_arm: LeftArm::choose(rng),
            edamame: Edamame::choose(rng),
            face_color: FaceColor::choose(rng),
            expression_mouth: Mouth::choose(rng),
            expression_eyes: Eyes::choose(rng),
            expression_eyebrows: Eyebrows::choose(rng),
        }
    }

    /// Build a descriptor from parameter pairs in any order.
    ///
    /// Every key must appear exactly once.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Result<Self, PoseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut head_direction: Option<HeadDirection> = None;
        let mut right_arm: Option<RightArm> = None;
        let mut left_arm: Option<LeftArm> = None;
        let mut edamame: Option<Edamame> = None;
        let mut face_color: Option<FaceColor> = None;
        let mut mouth: Option<Mouth> = None;
        let mut eyes: Option<Eyes> = None;
        let mut eyebrows: Option<Eyebrows> = None;

        for (key, value) in pairs {
            let duplicate = match key {
                HeadDirection::KEY => head_direction.replace(value.parse()?).is_some(),
                RightArm::KEY => right_arm.replace(value.parse()?).is_some(),
                LeftArm::KEY => left_arm.replace(value.parse()?).is_some(),
                Edamame::KEY => edamame.replace(value.parse()?).is_some(),
                FaceColor::KEY => face_color.replace(value.parse()?).is_some(),
                Mouth::KEY => mouth.replace(value.parse()?).is_some(),
                Eyes::KEY => eyes.replace(value.parse()?).is_some(),
                Eyebrows::KEY => eyebrows.replace(value.parse()?).is_some(),
                other => return Err(PoseError::UnknownKey(other.to_string())),
            };
            if duplicate {
                return Err(PoseError::DuplicateKey(key.to_string()));
            }
        }

        Ok(Self {
            head_direction: head_direction.ok_or(PoseError::MissingKey(HeadDirection::KEY))?,
            right_arm: right_arm.ok_or(PoseError::MissingKey(RightArm::KEY))?,
            left_arm: left_arm.ok_or(PoseError::MissingKey(LeftArm::KEY))?,
            edamame: edamame.ok_or(PoseError::MissingKey(Edamame::KEY))?,
            face_color: face_color.ok_or(PoseError::MissingKey(FaceColor::KEY))?,
            expression_mouth: mouth.ok_or(PoseError::MissingKey(Mouth::KEY))?,
            expression_eyes: eyes.ok_or(PoseError::MissingKey(Eyes::KEY))?,
            expression_eyebrows: eyebrows.ok_or(PoseError::MissingKey(Eyebrows::KEY))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> ExpressionDescriptor {
        ExpressionDescriptor {
            head_direction: HeadDirection::Up,
            right_arm: RightArm::PointUp,
            left_arm: LeftArm::Raised,
            edamame: Edamame::Standing,
            face_color: FaceColor::Blushing,
            expression_mouth: Mouth::O,
            expression_eyes: Eyes::Wide,
            expression_eyebrows: Eyebrows::Raised,
        }
    }

    #[test]
    fn test_query_pairs_canonical_order() {
        let keys: Vec<_> = sample().query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, PARAMETER_KEYS);
        assert_eq!(
            PARAMETER_KEYS,
            [
                "head_direction",
                "right_arm",
                "left_arm",
                "edamame",
                "face_color",
                "expression_mouth",
                "expression_eyes",
                "expression_eyebrows",
            ]
        );
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("〇〇".parse::<Eyes>(), Ok(Eyes::Wide));
        assert_eq!("^^".parse::<Eyes>(), Ok(Eyes::Happy));
        assert_eq!(
            "ウインク".parse::<Eyes>(),
            Err(PoseError::UnknownLabel {
                key: "expression_eyes",
                label: "ウインク".to_string(),
            })
        );
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(HeadDirection::ALL.len(), 2);
        assert_eq!(RightArm::ALL.len(), 6);
        assert_eq!(LeftArm::ALL.len(), 6);
        assert_eq!(Edamame::ALL.len(), 4);
        assert_eq!(FaceColor::ALL.len(), 5);
        assert_eq!(Mouth::ALL.len(), 8);
        assert_eq!(Eyes::ALL.len(), 7);
        assert_eq!(Eyebrows::ALL.len(), 5);
    }

    #[test]
    fn test_from_pairs_any_order() {
        let mut pairs = sample().query_pairs();
        pairs.reverse();
        assert_eq!(ExpressionDescriptor::from_query_pairs(pairs), Ok(sample()));
    }

    #[test]
    fn test_from_pairs_missing_key() {
        let pairs = sample().query_pairs();
        let result = ExpressionDescriptor::from_query_pairs(pairs[..7].iter().copied());
        assert_eq!(result, Err(PoseError::MissingKey("expression_eyebrows")));
    }

    #[test]
    fn test_from_pairs_duplicate_and_unknown() {
        let mut pairs = sample().query_pairs().to_vec();
        pairs.push(("edamame", "萎え"));
        assert_eq!(
            ExpressionDescriptor::from_query_pairs(pairs),
            Err(PoseError::DuplicateKey("edamame".to_string()))
        );

        let result = ExpressionDescriptor::from_query_pairs([("tail", "ふさふさ")]);
        assert_eq!(result, Err(PoseError::UnknownKey("tail".to_string())));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["head_direction"], "上向き");
        assert_eq!(json["expression_eyes"], "〇〇");
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = ExpressionDescriptor::random(&mut StdRng::seed_from_u64(7));
        let b = ExpressionDescriptor::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}

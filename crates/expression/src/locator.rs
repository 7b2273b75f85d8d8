//! Avatar resource locator
//!
//! The image endpoint takes the eight pose parameters as a query string.

use crate::pose::{ExpressionDescriptor, PoseError};

/// Image endpoint path
pub const RESOURCE_BASE_PATH: &str = "/api/zundamon/generate";

/// Encode a pose as an image endpoint locator.
///
/// Parameters follow the canonical attribute order, so equal descriptors
/// always produce byte-identical locators.
pub fn build_resource_locator(descriptor: &ExpressionDescriptor) -> String {
    let query = descriptor
        .query_pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", RESOURCE_BASE_PATH, query)
}

/// Decode a locator produced by [`build_resource_locator`]
pub fn parse_resource_locator(locator: &str) -> Result<ExpressionDescriptor, PoseError> {
    let query = locator
        .strip_prefix(RESOURCE_BASE_PATH)
        .and_then(|rest| rest.strip_prefix('?'))
        .ok_or_else(|| PoseError::MalformedLocator(locator.to_string()))?;

    let mut pairs = Vec::with_capacity(8);
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| PoseError::MalformedLocator(pair.to_string()))?;
        let value = urlencoding::decode(&value.replace('+', " "))
            .map_err(|_| PoseError::MalformedLocator(pair.to_string()))?
            .into_owned();
        pairs.push((key, value));
    }

    ExpressionDescriptor::from_query_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::{expression_for, RpmBand};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_idle_locator() {
        let locator = build_resource_locator(&expression_for(RpmBand::Idle));

        assert!(locator.starts_with("/api/zundamon/generate?head_direction="));
        let keys: Vec<_> = locator
            .split_once('?')
            .unwrap()
            .1
            .split('&')
            .map(|pair| pair.split_once('=').unwrap().0)
            .collect();
        assert_eq!(
            keys,
            vec![
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
    fn test_values_are_percent_encoded() {
        let locator = build_resource_locator(&expression_for(RpmBand::Idle));
        // 正面向き
        assert!(locator.contains("head_direction=%E6%AD%A3%E9%9D%A2%E5%90%91%E3%81%8D"));
        assert!(locator.is_ascii());
    }

    #[test]
    fn test_parse_back() {
        let high = expression_for(RpmBand::High);
        assert_eq!(parse_resource_locator(&build_resource_locator(&high)), Ok(high));
    }

    #[test]
    fn test_parse_rejects_other_paths() {
        let result = parse_resource_locator("/api/avatar?head_direction=x");
        assert!(matches!(result, Err(PoseError::MalformedLocator(_))));
    }

    proptest! {
        #[test]
        fn equal_descriptors_equal_locators(seed in any::<u64>()) {
            let a = ExpressionDescriptor::random(&mut StdRng::seed_from_u64(seed));
            let b = a;
            prop_assert_eq!(build_resource_locator(&a), build_resource_locator(&b));
        }
    }
}

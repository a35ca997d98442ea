//! Configuration for the schema processor.

use serde::{Deserialize, Serialize};

/// Schema processor configuration.
///
/// The deployed extractor existed in several near-identical copies that
/// differed only in a handful of constants; those knobs live here instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Add a fixed per-found-field bonus on top of the success ratio.
    ///
    /// Off by default: with the bonus enabled, confidence no longer equals
    /// the fraction of fields found once enough fields succeed. Kept only
    /// for compatibility with historical scores.
    pub legacy_confidence_boost: bool,

    /// Bonus added per found field when `legacy_confidence_boost` is on.
    pub boost_per_field: f32,

    /// Confidence below this threshold flags the result for human review.
    pub review_threshold: f32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            legacy_confidence_boost: false,
            boost_per_field: 0.02,
            review_threshold: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert!(!config.legacy_confidence_boost);
        assert_eq!(config.boost_per_field, 0.02);
        assert_eq!(config.review_threshold, 0.8);
    }

    #[test]
    fn test_partial_deserialization() {
        let config: ProcessorConfig =
            serde_json::from_str(r#"{"legacy_confidence_boost": true}"#).unwrap();
        assert!(config.legacy_confidence_boost);
        assert_eq!(config.boost_per_field, 0.02);
    }
}

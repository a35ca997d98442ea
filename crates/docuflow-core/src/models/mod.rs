//! Data models for schemas, configuration, and extraction results.

pub mod config;
pub mod schema;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::is_not_found;

/// Result of processing one document against one schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted value per schema field, keyed by field name.
    ///
    /// Every schema field has exactly one entry. A field that could not be
    /// located carries its not-found sentinel string as the value.
    pub values: BTreeMap<String, String>,

    /// Fraction of fields successfully located, in [0.0, 1.0].
    pub confidence: f32,
}

impl ExtractionResult {
    /// Number of fields that were successfully located.
    pub fn found_count(&self) -> usize {
        self.values.values().filter(|v| !is_not_found(v)).count()
    }

    /// Whether the result should be routed to human review.
    pub fn requires_review(&self, threshold: f32) -> bool {
        self.confidence < threshold
    }
}

//! Schema orchestration and confidence scoring.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::ExtractionResult;
use crate::models::config::ProcessorConfig;
use crate::models::schema::Schema;

use super::field::{FieldValueExtractor, is_not_found};

/// Runs a field schema against document text and scores the outcome.
///
/// Stateless over its inputs: processing the same text and schema twice
/// yields identical results, and one processor may serve many documents
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct SchemaProcessor {
    extractor: FieldValueExtractor,
    config: ProcessorConfig,
}

impl SchemaProcessor {
    /// Create a processor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable the legacy per-field confidence bonus.
    pub fn with_legacy_confidence_boost(mut self, enabled: bool) -> Self {
        self.config.legacy_confidence_boost = enabled;
        self
    }

    /// Set the bonus added per found field in legacy-boost mode.
    pub fn with_boost_per_field(mut self, boost: f32) -> Self {
        self.config.boost_per_field = boost;
        self
    }

    /// Extract every schema field from the text and score the result.
    ///
    /// The schema is validated first; extraction itself cannot fail, and
    /// the result carries exactly one value per schema field.
    pub fn process(&self, text: &str, schema: &Schema) -> Result<ExtractionResult> {
        schema.validate()?;

        info!(
            fields = schema.len(),
            chars = text.len(),
            "processing document against schema"
        );

        let mut values = BTreeMap::new();
        for field in schema.fields() {
            let value = self.extractor.extract(text, field);
            debug!(field = %field.name, %value, "extracted field");
            values.insert(field.name.clone(), value);
        }

        let confidence = self.confidence(&values, schema);
        debug!(confidence, "schema processing complete");

        Ok(ExtractionResult { values, confidence })
    }

    /// Whether a result falls below the configured review threshold.
    pub fn requires_review(&self, result: &ExtractionResult) -> bool {
        result.requires_review(self.config.review_threshold)
    }

    fn confidence(&self, values: &BTreeMap<String, String>, schema: &Schema) -> f32 {
        if schema.is_empty() {
            return 0.0;
        }

        let found = values.values().filter(|v| !is_not_found(v)).count();
        let mut confidence = found as f32 / schema.len() as f32;

        if self.config.legacy_confidence_boost {
            confidence += found as f32 * self.config.boost_per_field;
        }

        confidence.clamp(0.0, 1.0)
    }
}

/// Join raw text from several upstream sources (document conversion, OCR
/// passes) into one extraction input.
///
/// Sources are separated by a blank line so the line-oriented strategies
/// never see two sources merged onto one line. Empty sources are skipped.
pub fn combine_sources(sources: &[&str]) -> String {
    sources
        .iter()
        .map(|s| s.trim_matches('\n'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

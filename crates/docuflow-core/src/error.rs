//! Error types for the docuflow-core library.

use thiserror::Error;

/// Errors raised when a schema cannot be processed.
///
/// Extraction itself never fails: a field that cannot be located yields a
/// not-found sentinel value, not an error. Only malformed schemas are
/// rejected, before any extraction runs.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A field spec has an empty name.
    #[error("schema field at index {index} has an empty name")]
    MissingName { index: usize },

    /// Two field specs share the same name.
    #[error("duplicate field name in schema: {0}")]
    DuplicateName(String),

    /// The schema JSON could not be parsed.
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the docuflow-core library.
pub type Result<T> = std::result::Result<T, SchemaError>;

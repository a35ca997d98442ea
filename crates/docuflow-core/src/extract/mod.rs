//! Schema-driven field extraction engine.

mod field;
pub mod patterns;
mod processor;

pub use field::{FieldValueExtractor, NOT_FOUND_PREFIX, is_not_found};
pub use processor::{SchemaProcessor, combine_sources};

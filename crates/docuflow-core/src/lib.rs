//! Core library for schema-driven document field extraction.
//!
//! This crate provides:
//! - A field schema model (name, type, instruction, required flag)
//! - Rule-based field extraction from raw document text (currency, date,
//!   number, free text)
//! - Schema orchestration with an aggregate confidence score
//!
//! The engine is pure computation over in-memory strings: OCR and document
//! conversion are upstream collaborators that hand us their combined text.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{Result, SchemaError};
pub use extract::{FieldValueExtractor, SchemaProcessor, combine_sources, is_not_found};
pub use models::config::ProcessorConfig;
pub use models::schema::{FieldSpec, FieldType, Schema};
pub use models::ExtractionResult;

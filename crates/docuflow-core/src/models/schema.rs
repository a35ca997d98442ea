//! Field schema model: what to extract from a document.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SchemaError};

/// Type of a schema field, selecting the extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text after a keyword (default).
    #[default]
    Text,
    /// Monetary amount, optionally `$`-prefixed and comma-grouped.
    Currency,
    /// Bare numeric value.
    Number,
    /// Calendar date in one of the common numeric formats.
    Date,
}

impl FieldType {
    /// Parse a type string, falling back to `Text` for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "currency" => FieldType::Currency,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            _ => FieldType::Text,
        }
    }
}

// Unknown type strings come from user-authored schemas; treat them as text
// rather than rejecting the whole schema.
impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(FieldType::parse(&s))
    }
}

fn default_required() -> bool {
    true
}

/// One entry of a field schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name; unique within a schema, used as the result key.
    pub name: String,

    /// Extraction strategy for this field.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Free-text hint describing what to extract. May be empty.
    #[serde(default)]
    pub instruction: String,

    /// Whether the field is expected to be present.
    #[serde(default = "default_required")]
    pub required: bool,
}

impl FieldSpec {
    /// Create a field spec with an empty instruction.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            instruction: String::new(),
            required: true,
        }
    }

    /// Set the extraction instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Ordered sequence of field specs.
///
/// Insertion order determines extraction order; result values are keyed by
/// field name regardless of order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schema from a JSON array of field specs.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(json)?;
        Ok(schema)
    }

    /// Append a field spec.
    pub fn push(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Field specs in extraction order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate the schema before processing.
    ///
    /// Rejects empty field names (identifying the offending index) and
    /// duplicate names, which would silently collapse result entries.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::MissingName { index });
            }
            if seen.contains(&field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
            seen.push(&field.name);
        }
        Ok(())
    }
}

impl FromIterator<FieldSpec> for Schema {
    fn from_iter<T: IntoIterator<Item = FieldSpec>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_parse_fallback() {
        assert_eq!(FieldType::parse("currency"), FieldType::Currency);
        assert_eq!(FieldType::parse("DATE"), FieldType::Date);
        assert_eq!(FieldType::parse("decimal"), FieldType::Text);
        assert_eq!(FieldType::parse(""), FieldType::Text);
    }

    #[test]
    fn test_schema_from_json() {
        let json = r#"[
            {"name": "Vendor", "type": "text", "instruction": "vendor name"},
            {"name": "Total", "type": "currency"},
            {"name": "Pages", "type": "integer"}
        ]"#;

        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.fields()[0].name, "Vendor");
        assert_eq!(schema.fields()[0].instruction, "vendor name");
        assert_eq!(schema.fields()[1].field_type, FieldType::Currency);
        assert_eq!(schema.fields()[1].instruction, "");
        assert!(schema.fields()[1].required);
        // Unknown type strings fall back to text
        assert_eq!(schema.fields()[2].field_type, FieldType::Text);
    }

    #[test]
    fn test_validate_empty_name() {
        let schema: Schema = [
            FieldSpec::new("Vendor", FieldType::Text),
            FieldSpec::new("", FieldType::Currency),
        ]
        .into_iter()
        .collect();

        match schema.validate() {
            Err(SchemaError::MissingName { index }) => assert_eq!(index, 1),
            other => panic!("expected MissingName, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_duplicate_name() {
        let schema: Schema = [
            FieldSpec::new("Total", FieldType::Currency),
            FieldSpec::new("Total", FieldType::Text),
        ]
        .into_iter()
        .collect();

        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateName(name)) if name == "Total"
        ));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            Schema::from_json("{not json"),
            Err(SchemaError::Json(_))
        ));
    }
}

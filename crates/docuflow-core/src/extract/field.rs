//! Per-field extraction strategies.

use crate::models::schema::{FieldSpec, FieldType};

use super::patterns::{CURRENCY, LEADING_SEPARATOR, NUMBER, date_patterns};

/// Prefix shared by every not-found sentinel value.
pub const NOT_FOUND_PREFIX: &str = "No ";

/// Whether an extracted value is a not-found sentinel rather than a hit.
pub fn is_not_found(value: &str) -> bool {
    value.starts_with(NOT_FOUND_PREFIX)
}

/// Extracts a single field value from raw document text.
///
/// Each strategy scans keyword-bearing lines first and falls back to the
/// whole text, trading precision for recall: a best-effort guess is always
/// preferred over returning nothing. Extraction is line-oriented, so values
/// spanning multiple lines are not found.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValueExtractor;

impl FieldValueExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the value for one field.
    ///
    /// Total over its inputs: always returns a string, either the extracted
    /// value or the field type's not-found sentinel.
    pub fn extract(&self, text: &str, field: &FieldSpec) -> String {
        match field.field_type {
            FieldType::Currency => self.extract_currency(text, field),
            FieldType::Date => self.extract_date(text, field),
            FieldType::Number => self.extract_number(text, field),
            FieldType::Text => self.extract_text(text, field),
        }
    }

    fn extract_currency(&self, text: &str, field: &FieldSpec) -> String {
        let keywords = keyword_set(field, &["total", "amount", "cost", "price"]);

        for line in text.lines() {
            if line_has_keyword(line, &keywords) {
                if let Some(m) = CURRENCY.find(line) {
                    return normalize_currency(m.as_str());
                }
            }
        }

        // No keyword line had an amount; take the first amount anywhere
        if let Some(m) = CURRENCY.find(text) {
            return normalize_currency(m.as_str());
        }

        format!("No currency found for: {}", field.name)
    }

    fn extract_date(&self, text: &str, field: &FieldSpec) -> String {
        let keywords = keyword_set(field, &["date", "invoice date", "bill date", "issued"]);

        for line in text.lines() {
            if line_has_keyword(line, &keywords) {
                for pattern in date_patterns() {
                    if let Some(m) = pattern.find(line) {
                        return m.as_str().to_string();
                    }
                }
            }
        }

        for pattern in date_patterns() {
            if let Some(m) = pattern.find(text) {
                return m.as_str().to_string();
            }
        }

        format!("No date found for: {}", field.name)
    }

    fn extract_number(&self, text: &str, field: &FieldSpec) -> String {
        let keywords = keyword_set(field, &["number", "count", "qty", "quantity"]);

        for line in text.lines() {
            if line_has_keyword(line, &keywords) {
                if let Some(m) = NUMBER.find(line) {
                    return m.as_str().to_string();
                }
            }
        }

        if let Some(m) = NUMBER.find(text) {
            return m.as_str().to_string();
        }

        format!("No number found for: {}", field.name)
    }

    fn extract_text(&self, text: &str, field: &FieldSpec) -> String {
        let keywords = keyword_set(field, &[]);

        for line in text.lines() {
            let lower = line.to_lowercase();
            for keyword in &keywords {
                if let Some(pos) = lower.find(keyword.as_str()) {
                    // Indexing the original line with positions from the
                    // lowercased copy; get() keeps odd casefolds panic-free.
                    if let Some(after) = line.get(pos + keyword.len()..) {
                        return strip_label_separator(after);
                    }
                }
            }
        }

        // Last resort: the whole line that mentions the field name
        let name = field.name.to_lowercase();
        if !name.is_empty() {
            for line in text.lines() {
                if line.to_lowercase().contains(&name) {
                    return line.trim().to_string();
                }
            }
        }

        format!("No text found for: {}", field.name)
    }
}

/// Lowercased keywords for a field: its name, its instruction (when
/// non-empty), and the strategy's built-in signal words.
fn keyword_set(field: &FieldSpec, extra: &[&str]) -> Vec<String> {
    let mut keywords = Vec::with_capacity(extra.len() + 2);
    if !field.name.is_empty() {
        keywords.push(field.name.to_lowercase());
    }
    if !field.instruction.is_empty() {
        keywords.push(field.instruction.to_lowercase());
    }
    keywords.extend(extra.iter().map(|s| s.to_string()));
    keywords
}

fn line_has_keyword(line: &str, keywords: &[String]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

/// Strip `$` and thousands commas from a matched amount.
fn normalize_currency(amount: &str) -> String {
    amount.replace(['$', ','], "")
}

/// Drop the label separator and surrounding whitespace from a value.
fn strip_label_separator(value: &str) -> String {
    LEADING_SEPARATOR.replace(value.trim_start(), "").trim().to_string()
}

//! Common regex patterns for field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Monetary amount: optional $, comma-grouped digits, up to two decimal
    // digits. The leading digit requirement keeps a bare comma from matching;
    // whole-dollar and single-decimal amounts ($500, $500.5) still do.
    pub static ref CURRENCY: Regex = Regex::new(
        r"\$?\d[\d,]*(?:\.\d{1,2})?"
    ).unwrap();

    // Date formats, in fixed priority order
    pub static ref DATE_SLASH: Regex = Regex::new(
        r"\b\d{1,2}/\d{1,2}/\d{2,4}\b"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b\d{4}-\d{2}-\d{2}\b"
    ).unwrap();

    pub static ref DATE_DASH: Regex = Regex::new(
        r"\b\d{1,2}-\d{1,2}-\d{2,4}\b"
    ).unwrap();

    pub static ref DATE_DOT: Regex = Regex::new(
        r"\b\d{1,2}\.\d{1,2}\.\d{2,4}\b"
    ).unwrap();

    // Bare numeric value
    pub static ref NUMBER: Regex = Regex::new(
        r"\b\d+\.?\d*\b"
    ).unwrap();

    // Separator between a label and its value ("Vendor: Home Depot")
    pub static ref LEADING_SEPARATOR: Regex = Regex::new(
        r"^[:\-\u{2013}\u{2014}]\s*"
    ).unwrap();
}

/// Date patterns in match priority order: slash, ISO, dash, dot.
pub fn date_patterns() -> [&'static Regex; 4] {
    [&DATE_SLASH, &DATE_ISO, &DATE_DASH, &DATE_DOT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_pattern() {
        assert_eq!(CURRENCY.find("Total: $1,234.56").unwrap().as_str(), "$1,234.56");
        assert_eq!(CURRENCY.find("owes $500 today").unwrap().as_str(), "$500");
        assert_eq!(CURRENCY.find("about $500.5").unwrap().as_str(), "$500.5");
        // A lone comma is not an amount
        assert!(CURRENCY.find("one, two").is_none());
    }

    #[test]
    fn test_date_patterns() {
        assert!(DATE_SLASH.is_match("12/20/2025"));
        assert!(DATE_SLASH.is_match("1/2/25"));
        assert!(DATE_ISO.is_match("2025-12-26"));
        assert!(!DATE_ISO.is_match("12-26-2025"));
        assert!(DATE_DASH.is_match("12-26-2025"));
        assert!(DATE_DOT.is_match("12.26.2025"));
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(LEADING_SEPARATOR.replace(": Home Depot", ""), "Home Depot");
        assert_eq!(LEADING_SEPARATOR.replace("- Home Depot", ""), "Home Depot");
        assert_eq!(LEADING_SEPARATOR.replace("\u{2014} Home Depot", ""), "Home Depot");
        assert_eq!(LEADING_SEPARATOR.replace("Home Depot", ""), "Home Depot");
    }
}

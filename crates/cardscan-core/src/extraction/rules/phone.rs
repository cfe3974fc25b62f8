//! Phone number extraction.

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};

/// Phone field extractor for North American numbers.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), 0.8, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first phone number from text, formatted as found.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

/// Whether text contains something shaped like a phone number.
pub fn is_phone_like(text: &str) -> bool {
    PHONE.is_match(text)
}

/// Reduce a phone number to its ten significant digits.
///
/// Returns `None` when the input does not contain a North American number.
pub fn normalize_phone(phone: &str) -> Option<String> {
    let caps = PHONE.captures(phone)?;
    Some(format!("{}{}{}", &caps[1], &caps[2], &caps[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phone_keeps_formatting() {
        let text = "John Smith\nTel: (555) 123-4567\nFax: 555-987-6543";
        assert_eq!(extract_phone(text), Some("(555) 123-4567".to_string()));
    }

    #[test]
    fn test_extract_phone_with_country_code() {
        assert_eq!(
            extract_phone("Mobile +1 415.555.0199"),
            Some("+1 415.555.0199".to_string())
        );
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(555) 123-4567"), Some("5551234567".to_string()));
        assert_eq!(normalize_phone("+1-555-123-4567"), Some("5551234567".to_string()));
        assert_eq!(normalize_phone("12-34"), None);
    }
}

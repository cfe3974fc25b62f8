//! Street address line extraction.

use super::patterns::{contains_keyword, ADDRESS_KEYWORDS, DIGIT, FIVE_DIGITS};
use super::{card_lines, ExtractionMatch, FieldExtractor};

/// Address field extractor.
///
/// A line qualifies when it holds a digit and an address keyword
/// ("123 Main Street"), or a comma and a five digit run ("Springfield, IL 62704").
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a single line looks like part of a postal address.
pub fn is_address_line(line: &str) -> bool {
    let street = DIGIT.is_match(line) && contains_keyword(line, ADDRESS_KEYWORDS);
    let city_zip = line.contains(',') && FIVE_DIGITS.is_match(line);
    street || city_zip
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        card_lines(text)
            .into_iter()
            .filter(|(_, line)| is_address_line(line))
            .map(|(start, line)| {
                ExtractionMatch::new(line.to_string(), 0.6, line)
                    .with_position(start, start + line.len())
            })
            .collect()
    }
}

/// Extract the first address line from text.
pub fn extract_address(text: &str) -> Option<String> {
    AddressExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_line() {
        let text = "Jane Doe\n742 Evergreen Terrace, Suite 5\nSpringfield";
        assert_eq!(
            extract_address(text),
            Some("742 Evergreen Terrace, Suite 5".to_string())
        );
    }

    #[test]
    fn test_city_zip_line() {
        assert!(is_address_line("Springfield, IL 62704"));
        assert!(!is_address_line("Springfield IL 62704"));
    }

    #[test]
    fn test_keyword_without_digit_is_not_an_address() {
        assert!(!is_address_line("Main Street"));
        assert_eq!(extract_address("Jane Doe\nDirector of Sales"), None);
    }

    #[test]
    fn test_all_address_lines() {
        let text = "100 King St\nToronto, ON 12345";
        let all = AddressExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].value, "100 King St");
    }
}

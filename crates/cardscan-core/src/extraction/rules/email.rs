//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};

/// Email field extractor. Scans the whole text, not single lines.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), 0.95, m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), 0.95, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

/// Whether text contains something shaped like an email address.
pub fn is_email_like(text: &str) -> bool {
    EMAIL.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        let text = "Jane Doe\nSales: jane.doe+cards@mail.acme.io\nsupport@acme.io";
        assert_eq!(extract_email(text), Some("jane.doe+cards@mail.acme.io".to_string()));
    }

    #[test]
    fn test_extract_all_emails() {
        let text = "a@b.com, c@d.org";
        let all = EmailExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].value, "c@d.org");
        assert_eq!(all[1].position, Some((9, 16)));
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("John Smith\nAcme Corp"), None);
        assert!(!is_email_like("jane at acme dot com"));
    }
}

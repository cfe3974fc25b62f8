//! Website extraction.

use super::patterns::WEBSITE;
use super::{ExtractionMatch, FieldExtractor};

/// Website field extractor.
///
/// The pattern is permissive: anything shaped like `host.tld[/path]`
/// qualifies, including the domain part of an email address when it appears
/// first in the text.
pub struct WebsiteExtractor;

impl WebsiteExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebsiteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for WebsiteExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        WEBSITE
            .find_iter(text)
            .map(|m| {
                let confidence = if m.as_str().starts_with("http") || m.as_str().starts_with("www.") {
                    0.9
                } else {
                    0.6
                };
                ExtractionMatch::new(m.as_str().to_string(), confidence, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first website from text.
pub fn extract_website(text: &str) -> Option<String> {
    WebsiteExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_website_with_scheme_and_path() {
        let text = "Jane Doe\nhttps://www.acme.io/team/jane";
        assert_eq!(
            extract_website(text),
            Some("https://www.acme.io/team/jane".to_string())
        );
    }

    #[test]
    fn test_extract_bare_domain() {
        let m = WebsiteExtractor::new().extract("Visit acme.com today").unwrap();
        assert_eq!(m.value, "acme.com");
        assert!(m.confidence < 0.9);
    }

    #[test]
    fn test_no_website() {
        assert_eq!(extract_website("John Smith\n(555) 123-4567"), None);
    }
}

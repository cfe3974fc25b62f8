//! Rule-based field extractors for business card text.

pub mod address;
pub mod email;
pub mod keywords;
pub mod patterns;
pub mod phone;
pub mod website;

pub use address::{extract_address, AddressExtractor};
pub use email::{extract_email, EmailExtractor};
pub use keywords::{extract_company, extract_job_title, KeywordLineExtractor};
pub use patterns::*;
pub use phone::{extract_phone, normalize_phone, PhoneExtractor};
pub use website::{extract_website, WebsiteExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched field value with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Split card text into trimmed, non-empty lines with their byte offsets.
pub fn card_lines(text: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw in text.split('\n') {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let lead = raw.len() - raw.trim_start().len();
            lines.push((offset + lead, trimmed));
        }
        offset += raw.len() + 1;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_lines_trims_and_skips_blanks() {
        let text = "  John Smith \r\n\n   \nAcme Corp";
        let lines = card_lines(text);
        assert_eq!(lines, vec![(2, "John Smith"), (20, "Acme Corp")]);
        assert_eq!(&text[20..29], "Acme Corp");
    }

    #[test]
    fn test_card_lines_empty() {
        assert!(card_lines("").is_empty());
        assert!(card_lines("\n \n\t").is_empty());
    }
}

//! Keyword-driven line extraction for company names and job titles.

use super::patterns::{contains_keyword, COMPANY_KEYWORDS, JOB_TITLE_KEYWORDS};
use super::{card_lines, ExtractionMatch, FieldExtractor};

/// Picks whole lines whose lowercase text contains one of a keyword set.
pub struct KeywordLineExtractor {
    keywords: &'static [&'static str],
}

impl KeywordLineExtractor {
    /// Create an extractor over an arbitrary keyword set.
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    /// Extractor for company lines ("Acme Corp", "Widgets LLC").
    pub fn company() -> Self {
        Self::new(COMPANY_KEYWORDS)
    }

    /// Extractor for job title lines ("Senior Engineer").
    pub fn job_title() -> Self {
        Self::new(JOB_TITLE_KEYWORDS)
    }
}

impl FieldExtractor for KeywordLineExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        card_lines(text)
            .into_iter()
            .filter(|(_, line)| contains_keyword(line, self.keywords))
            .map(|(start, line)| {
                ExtractionMatch::new(line.to_string(), 0.6, line)
                    .with_position(start, start + line.len())
            })
            .collect()
    }
}

/// Extract the first line that looks like a company name.
pub fn extract_company(text: &str) -> Option<String> {
    KeywordLineExtractor::company().extract(text).map(|m| m.value)
}

/// Extract the first line that looks like a job title.
pub fn extract_job_title(text: &str) -> Option<String> {
    KeywordLineExtractor::job_title().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_company_first_match_wins() {
        let text = "Jane Doe\nGlobex Corporation\nInitech LLC";
        assert_eq!(extract_company(text), Some("Globex Corporation".to_string()));
    }

    #[test]
    fn test_extract_job_title() {
        let text = "Jane Doe\n  Senior Software Engineer  \nGlobex";
        assert_eq!(
            extract_job_title(text),
            Some("Senior Software Engineer".to_string())
        );
    }

    #[test]
    fn test_line_position_points_into_source() {
        let text = "Jane Doe\n  Product Manager";
        let m = KeywordLineExtractor::job_title().extract(text).unwrap();
        let (start, end) = m.position.unwrap();
        assert_eq!(&text[start..end], "Product Manager");
    }

    #[test]
    fn test_no_keyword_line() {
        assert_eq!(extract_company("Jane Doe\njane@example.org"), None);
        assert_eq!(extract_job_title("Jane Doe"), None);
    }
}

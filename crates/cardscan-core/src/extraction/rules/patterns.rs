//! Common regex patterns and keyword sets for business card extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone pattern (North American format, optional +1 prefix)
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})"
    ).unwrap();

    // Website pattern (optional scheme and www prefix, optional path)
    pub static ref WEBSITE: Regex = Regex::new(
        r"(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)"
    ).unwrap();

    // Any digit
    pub static ref DIGIT: Regex = Regex::new(r"\d").unwrap();

    // Five consecutive digits (US ZIP code)
    pub static ref FIVE_DIGITS: Regex = Regex::new(r"\d{5}").unwrap();
}

/// Lowercase fragments marking a company line.
pub const COMPANY_KEYWORDS: &[&str] = &[
    "inc",
    "corp",
    "llc",
    "ltd",
    "company",
    "co.",
    "corporation",
];

/// Lowercase fragments marking a job title line.
pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "manager",
    "director",
    "developer",
    "engineer",
    "designer",
    "consultant",
    "analyst",
    "specialist",
];

/// Lowercase fragments marking a street address line.
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "street", "st", "avenue", "ave", "road", "rd", "drive", "dr", "suite", "floor",
];

/// Whether the lowercase form of `line` contains any of `keywords`.
pub fn contains_keyword(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_keyword_is_case_insensitive() {
        assert!(contains_keyword("ACME CORP", COMPANY_KEYWORDS));
        assert!(contains_keyword("Senior Engineer", JOB_TITLE_KEYWORDS));
        assert!(!contains_keyword("John Smith", COMPANY_KEYWORDS));
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // Substring matching is deliberate: "Lincoln" contains "inc".
        assert!(contains_keyword("Lincoln Partners", COMPANY_KEYWORDS));
    }

    #[test]
    fn test_phone_pattern_variants() {
        for phone in ["(555) 123-4567", "555.123.4567", "+1 555 123 4567", "5551234567"] {
            assert!(PHONE.is_match(phone), "{phone}");
        }
        assert!(!PHONE.is_match("123-45"));
    }
}

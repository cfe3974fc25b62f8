//! Heuristic card parser combining the per-field rules.

use tracing::{debug, info};

use crate::models::contact::{Contact, ParsedCard};

use super::rules::{
    card_lines,
    email::is_email_like,
    phone::is_phone_like,
    AddressExtractor, EmailExtractor, ExtractionMatch, FieldExtractor, KeywordLineExtractor,
    PhoneExtractor, WebsiteExtractor,
};

/// Result of parsing card text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Fields that were found.
    pub card: ParsedCard,
    /// Raw input text.
    pub raw_text: String,
    /// Names of fields that could not be found.
    pub missing_fields: Vec<&'static str>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Convert the parsed fields into a contact record.
    pub fn to_contact(&self) -> Contact {
        self.card.clone().into()
    }
}

/// Trait for card text parsing.
pub trait CardParser {
    /// Parse card fields from text. Never fails: unmatched fields stay empty.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based business card field extractor.
///
/// Each field is found independently, so a single line may end up as the
/// company, the job title and the address at once.
pub struct CardFieldExtractor {
    email: EmailExtractor,
    phone: PhoneExtractor,
    website: WebsiteExtractor,
    company: KeywordLineExtractor,
    job_title: KeywordLineExtractor,
    address: AddressExtractor,
}

impl CardFieldExtractor {
    /// Create an extractor with the default rule set.
    pub fn new() -> Self {
        Self {
            email: EmailExtractor::new(),
            phone: PhoneExtractor::new(),
            website: WebsiteExtractor::new(),
            company: KeywordLineExtractor::company(),
            job_title: KeywordLineExtractor::job_title(),
            address: AddressExtractor::new(),
        }
    }

    /// Extract the candidate fields from card text.
    pub fn extract(&self, text: &str) -> ParsedCard {
        ParsedCard {
            name: self.extract_name(text),
            email: value(self.email.extract(text)),
            phone: value(self.phone.extract(text)),
            company: value(self.company.extract(text)),
            address: value(self.address.extract(text)),
            website: value(self.website.extract(text)),
            job_title: value(self.job_title.extract(text)),
        }
    }

    /// The name is the first non-empty line, unless that line is an email
    /// or phone number. No later line is considered.
    fn extract_name(&self, text: &str) -> Option<String> {
        let (_, first) = card_lines(text).into_iter().next()?;
        if is_email_like(first) || is_phone_like(first) {
            debug!("First line is contact info, leaving name empty");
            return None;
        }
        Some(first.to_string())
    }
}

impl Default for CardFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for CardFieldExtractor {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Stopwatch::start();

        info!("Parsing card from {} characters of text", text.len());

        let card = self.extract(text);

        let missing_fields: Vec<&'static str> = [
            ("name", card.name.is_none()),
            ("email", card.email.is_none()),
            ("phone", card.phone.is_none()),
            ("company", card.company.is_none()),
            ("address", card.address.is_none()),
            ("website", card.website.is_none()),
            ("jobTitle", card.job_title.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect();

        debug!(
            "Extracted {} card fields, missing: {:?}",
            card.found_count(),
            missing_fields
        );

        ExtractionResult {
            card,
            raw_text: text.to_string(),
            missing_fields,
            processing_time_ms: start.elapsed_ms(),
        }
    }
}

/// Wall clock timer. `Instant` is unavailable on `wasm32-unknown-unknown`,
/// where parse timings read as zero.
struct Stopwatch {
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Stopwatch {
    fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            start: std::time::Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> u64 {
        #[cfg(not(target_arch = "wasm32"))]
        return self.start.elapsed().as_millis() as u64;
        #[cfg(target_arch = "wasm32")]
        return 0;
    }
}

fn value(m: Option<ExtractionMatch<String>>) -> Option<String> {
    m.map(|m| m.value)
}

/// Extract contact fields from raw card text with the default rules.
pub fn extract_card_fields(text: &str) -> ParsedCard {
    CardFieldExtractor::new().extract(text)
}

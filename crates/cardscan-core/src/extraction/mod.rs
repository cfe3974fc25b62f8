//! Contact field extraction from card text and from structured analysis results.

mod parser;
pub mod rules;
pub mod structured;

pub use parser::{extract_card_fields, CardFieldExtractor, CardParser, ExtractionResult};
pub use structured::{map_documents, StructuredFieldMapper};

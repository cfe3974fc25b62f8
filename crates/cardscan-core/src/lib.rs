//! Core library for business card digitizing.
//!
//! This crate provides:
//! - Heuristic contact field extraction from raw card text
//! - Mapping of structured card analysis results to contacts
//! - Submit-and-poll orchestration against a remote analysis service
//! - A contact exchange codec (vCard and JSON payloads) for scannable codes
//! - Local card and profile storage

pub mod codec;
pub mod error;
pub mod extraction;
pub mod models;
pub mod store;

#[cfg(feature = "native")]
pub mod analysis;

pub use codec::{decode, encode, sniff_format, PayloadFormat, SniffedFormat};
pub use error::{AnalysisError, CardscanError, DecodeError, Result};
pub use extraction::{
    extract_card_fields, map_documents, CardFieldExtractor, CardParser, ExtractionResult,
    StructuredFieldMapper,
};
pub use models::card::CardRecord;
pub use models::config::CardscanConfig;
pub use models::contact::{Contact, ParsedCard};
pub use store::{CardStore, JsonFileStore, ProfileStore};

#[cfg(feature = "native")]
pub use analysis::{
    AnalysisOutput, AnalysisService, AzureBusinessCardClient, ExtractionOrchestrator, JobHandle,
    JobStatus,
};

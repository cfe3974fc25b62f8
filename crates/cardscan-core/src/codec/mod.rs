//! Contact exchange codec.
//!
//! A contact travels between two app instances as a single text payload in
//! one of two formats: a minimal vCard 3.0 or a JSON object. Decoding sniffs
//! the format from the payload itself.

mod json;
mod vcard;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DecodeError;
use crate::models::contact::Contact;

pub use json::{decode_json, encode_json};
pub use vcard::{decode_vcard, encode_vcard};

/// Marker that identifies a vCard payload.
pub const VCARD_MARKER: &str = "BEGIN:VCARD";

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Payload encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// Line oriented vCard 3.0 subset, readable by phone contact apps.
    VCard,
    /// JSON object; round-trips every field.
    Json,
}

impl PayloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadFormat::VCard => "vcard",
            PayloadFormat::Json => "json",
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vcard" | "vcf" => Ok(PayloadFormat::VCard),
            "json" => Ok(PayloadFormat::Json),
            other => Err(format!("unknown payload format: {other}")),
        }
    }
}

/// Outcome of sniffing a payload's format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedFormat {
    VCard,
    Json,
    Unrecognized,
}

/// Decide how a payload should be decoded.
///
/// A payload containing `BEGIN:VCARD` anywhere is a vCard; otherwise a
/// payload that is wrapped in braces once trimmed is JSON.
pub fn sniff_format(payload: &str) -> SniffedFormat {
    let trimmed = payload.trim();
    if trimmed.contains(VCARD_MARKER) {
        SniffedFormat::VCard
    } else if trimmed.starts_with('{') && trimmed.ends_with('}') {
        SniffedFormat::Json
    } else {
        SniffedFormat::Unrecognized
    }
}

/// Encode a contact into a payload string.
pub fn encode(contact: &Contact, format: PayloadFormat) -> String {
    match format {
        PayloadFormat::VCard => encode_vcard(contact),
        PayloadFormat::Json => encode_json(contact),
    }
}

/// Decode a scanned payload into a contact.
///
/// Fails without returning partial data when the format is unknown, the
/// payload is malformed or the contact has no name.
pub fn decode(payload: &str) -> Result<Contact> {
    let format = sniff_format(payload);
    debug!("Decoding {} byte payload as {:?}", payload.len(), format);

    match format {
        SniffedFormat::VCard => decode_vcard(payload.trim()),
        SniffedFormat::Json => decode_json(payload.trim()),
        SniffedFormat::Unrecognized => Err(DecodeError::UnrecognizedFormat),
    }
}

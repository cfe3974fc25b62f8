//! Error types for the cardscan-core library.

use thiserror::Error;

/// Main error type for the cardscan library.
#[derive(Error, Debug)]
pub enum CardscanError {
    /// Remote card analysis error.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Contact payload decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A contact failed validation.
    #[error("invalid contact: {0}")]
    InvalidContact(String),

    /// No card record with the given id exists in the store.
    #[error("card not found: {0}")]
    CardNotFound(String),
}

/// Errors raised while submitting an image to the analysis service and
/// waiting for its result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The service did not hand back a job handle.
    #[error("submission failed: {0}")]
    Submission(String),

    /// The service reported that the analysis job failed.
    #[error("card analysis failed: {}", .0.as_deref().unwrap_or("no details given"))]
    Failed(Option<String>),

    /// No terminal status was reached within the poll budget.
    #[error("timed out waiting for analysis results after {attempts} polls")]
    Timeout { attempts: u32 },

    /// A status request could not be completed.
    #[error("transport error: {0}")]
    Transport(String),

    /// A status response did not have the expected shape.
    #[error("invalid analysis response: {0}")]
    InvalidResponse(String),
}

/// Errors raised while decoding a scanned contact payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload is neither a vCard nor a JSON object.
    #[error("unrecognized payload format")]
    UnrecognizedFormat,

    /// The payload looked like JSON but is not a valid JSON object.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A required field is missing or blank.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Result type for the cardscan library.
pub type Result<T> = std::result::Result<T, CardscanError>;

//! Remote business card analysis.
//!
//! An image is submitted to an external document-analysis service, which
//! answers with a job handle. The job is then polled at a fixed interval
//! until it succeeds, fails, or the poll budget runs out.

mod azure;
mod orchestrator;

pub use azure::AzureBusinessCardClient;
pub use orchestrator::ExtractionOrchestrator;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AnalysisError;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Opaque handle of a submitted analysis job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(pub String);

impl JobHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Output of a finished analysis job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOutput {
    /// Structured documents, one per detected card.
    pub documents: Vec<Value>,
    /// Full recognized text, when the service returns it.
    pub content: Option<String>,
}

/// Status of an analysis job as reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus {
    /// Not finished yet; poll again.
    Running,
    /// Finished with a result.
    Succeeded(AnalysisOutput),
    /// Finished with an error, optionally described by the service.
    Failed(Option<String>),
}

/// External service that turns card images into structured fields.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit an image and return the handle of the created job.
    async fn submit(&self, image: &[u8]) -> Result<JobHandle>;

    /// Fetch the current status of a job.
    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus>;
}

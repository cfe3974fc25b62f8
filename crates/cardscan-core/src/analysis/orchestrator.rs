//! Submit-and-poll coordination of a card analysis job.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::extraction::{CardFieldExtractor, StructuredFieldMapper};
use crate::models::card::CardRecord;
use crate::models::config::AnalysisConfig;
use crate::models::contact::Contact;

use super::{AnalysisOutput, AnalysisService, JobStatus, Result};

/// Drives an [`AnalysisService`] from image to contact.
///
/// Polls are strictly sequential and bounded by `max_polls`; there is no
/// backoff and no retry beyond that budget. Dropping the returned future
/// abandons the job locally but does not cancel it on the service.
pub struct ExtractionOrchestrator<S> {
    service: S,
    max_polls: u32,
    poll_interval: Duration,
    mapper: StructuredFieldMapper,
    extractor: CardFieldExtractor,
}

impl<S: AnalysisService> ExtractionOrchestrator<S> {
    /// Create an orchestrator with the default budget of 10 polls, 2 seconds apart.
    pub fn new(service: S) -> Self {
        Self::with_config(service, &AnalysisConfig::default())
    }

    /// Create an orchestrator using the poll budget from configuration.
    pub fn with_config(service: S, config: &AnalysisConfig) -> Self {
        Self {
            service,
            max_polls: config.max_polls,
            poll_interval: config.poll_interval(),
            mapper: StructuredFieldMapper::new(),
            extractor: CardFieldExtractor::new(),
        }
    }

    /// Set the maximum number of status polls.
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls;
        self
    }

    /// Set the delay between status polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The wrapped service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Analyze a card image and return the extracted contact.
    pub async fn extract_from_image(&self, image: &[u8]) -> Result<Contact> {
        let output = self.analyze(image).await?;
        Ok(self.route(&output))
    }

    /// Analyze a card image and keep the recognized text with the contact.
    pub async fn extract_card(&self, image: &[u8]) -> Result<CardRecord> {
        let output = self.analyze(image).await?;
        let contact = self.route(&output);
        Ok(CardRecord::new(contact, output.content.unwrap_or_default()))
    }

    /// Run the submit/poll protocol and return the raw analysis output.
    pub async fn analyze(&self, image: &[u8]) -> Result<AnalysisOutput> {
        info!("Submitting {} byte image for analysis", image.len());
        let handle = self.service.submit(image).await?;
        debug!("Analysis job submitted: {}", handle.as_str());

        for attempt in 1..=self.max_polls {
            match self.service.poll_status(&handle).await? {
                JobStatus::Succeeded(output) => {
                    info!(
                        "Analysis succeeded after {} poll(s) with {} document(s)",
                        attempt,
                        output.documents.len()
                    );
                    return Ok(output);
                }
                JobStatus::Failed(reason) => {
                    warn!("Analysis failed on poll {}", attempt);
                    return Err(AnalysisError::Failed(reason));
                }
                JobStatus::Running => {
                    debug!("Poll {}/{}: still running", attempt, self.max_polls);
                    if attempt < self.max_polls {
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        }

        warn!("Analysis did not finish within {} polls", self.max_polls);
        Err(AnalysisError::Timeout {
            attempts: self.max_polls,
        })
    }

    /// Parse raw card text with the rule-based extractor.
    pub fn extract_from_text(&self, text: &str) -> Contact {
        self.extractor.extract(text).into()
    }

    /// Turn analysis output into a contact.
    ///
    /// Structured documents win; plain recognized text is the fallback when
    /// the service found no card document.
    fn route(&self, output: &AnalysisOutput) -> Contact {
        if output.documents.is_empty() {
            if let Some(content) = output.content.as_deref().filter(|c| !c.trim().is_empty()) {
                debug!("No structured documents, parsing recognized text");
                return self.extract_from_text(content);
            }
        }
        self.mapper.map_documents(&output.documents)
    }
}

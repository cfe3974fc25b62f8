//! Azure Form Recognizer client for the prebuilt business card model.

use std::time::Duration;

use async_trait::async_trait;
use image::ImageFormat;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AnalysisError, CardscanError};
use crate::models::config::AnalysisConfig;

use super::{AnalysisOutput, AnalysisService, JobHandle, JobStatus, Result};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION_HEADER: &str = "operation-location";

/// HTTP client for the Azure document analysis REST API.
pub struct AzureBusinessCardClient {
    client: reqwest::Client,
    analyze_url: String,
    api_key: String,
}

impl AzureBusinessCardClient {
    /// Create a client from configuration.
    pub fn new(config: &AnalysisConfig) -> crate::error::Result<Self> {
        config.validate().map_err(CardscanError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CardscanError::Config(e.to_string()))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl AnalysisService for AzureBusinessCardClient {
    async fn submit(&self, image: &[u8]) -> Result<JobHandle> {
        let content_type = image_content_type(image);
        debug!("POST {} ({})", self.analyze_url, content_type);

        let response = self
            .client
            .post(&self.analyze_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| AnalysisError::Submission(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Submission(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| JobHandle(v.to_string()))
            .ok_or_else(|| {
                AnalysisError::Submission("no operation-location returned".to_string())
            })
    }

    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus> {
        let response = self
            .client
            .get(handle.as_str())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Transport(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::InvalidResponse(e.to_string()))?;

        parse_poll_response(body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PollResponse {
    status: String,
    #[serde(default)]
    analyze_result: Option<AnalyzeResult>,
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyzeResult {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    documents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret the body of a status request.
///
/// `succeeded` and `failed` are terminal; every other status (`notStarted`,
/// `running`) means the job is still pending.
fn parse_poll_response(body: Value) -> Result<JobStatus> {
    let response: PollResponse = serde_json::from_value(body)
        .map_err(|e| AnalysisError::InvalidResponse(e.to_string()))?;

    match response.status.as_str() {
        "succeeded" => {
            let result = response.analyze_result.unwrap_or_default();
            Ok(JobStatus::Succeeded(AnalysisOutput {
                documents: result.documents,
                content: result.content,
            }))
        }
        "failed" => {
            let reason = response.error.map(|e| match (e.code, e.message) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (code, message) => message.or(code).unwrap_or_default(),
            });
            Ok(JobStatus::Failed(reason.filter(|r| !r.is_empty())))
        }
        other => {
            debug!("Analysis status: {}", other);
            Ok(JobStatus::Running)
        }
    }
}

/// MIME type for an uploaded card image, sniffed from its bytes.
fn image_content_type(image: &[u8]) -> &'static str {
    match image::guess_format(image) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Tiff) => "image/tiff",
        Ok(ImageFormat::Bmp) => "image/bmp",
        Ok(ImageFormat::WebP) => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_succeeded() {
        let body = json!({
            "status": "succeeded",
            "analyzeResult": {
                "content": "Jane Doe\nGlobex",
                "documents": [ { "docType": "businessCard", "fields": {} } ]
            }
        });

        let JobStatus::Succeeded(output) = parse_poll_response(body).unwrap() else {
            panic!("expected success");
        };
        assert_eq!(output.documents.len(), 1);
        assert_eq!(output.content.as_deref(), Some("Jane Doe\nGlobex"));
    }

    #[test]
    fn test_parse_succeeded_without_result() {
        assert_eq!(
            parse_poll_response(json!({ "status": "succeeded" })).unwrap(),
            JobStatus::Succeeded(AnalysisOutput::default())
        );
    }

    #[test]
    fn test_parse_failed() {
        let body = json!({
            "status": "failed",
            "error": { "code": "InvalidRequest", "message": "Invalid image." }
        });
        assert_eq!(
            parse_poll_response(body).unwrap(),
            JobStatus::Failed(Some("InvalidRequest: Invalid image.".to_string()))
        );
        assert_eq!(
            parse_poll_response(json!({ "status": "failed" })).unwrap(),
            JobStatus::Failed(None)
        );
    }

    #[test]
    fn test_parse_pending_statuses() {
        for status in ["notStarted", "running", "somethingNew"] {
            assert_eq!(
                parse_poll_response(json!({ "status": status })).unwrap(),
                JobStatus::Running
            );
        }
    }

    #[test]
    fn test_parse_invalid_body() {
        assert!(matches!(
            parse_poll_response(json!({ "unexpected": true })),
            Err(AnalysisError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_image_content_type() {
        assert_eq!(image_content_type(b"\x89PNG\r\n\x1a\n0000"), "image/png");
        assert_eq!(image_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(image_content_type(b"unknown"), "image/jpeg");
    }

    #[test]
    fn test_new_rejects_incomplete_config() {
        assert!(matches!(
            AzureBusinessCardClient::new(&AnalysisConfig::default()),
            Err(CardscanError::Config(_))
        ));
    }
}

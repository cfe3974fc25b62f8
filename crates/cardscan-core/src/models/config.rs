//! Configuration structures for the card scanning pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::codec::PayloadFormat;

/// Main configuration for cardscan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardscanConfig {
    /// Remote card analysis configuration.
    pub analysis: AnalysisConfig,

    /// Contact exchange codec configuration.
    pub codec: CodecConfig,

    /// Local storage configuration.
    pub storage: StorageConfig,
}

/// Remote analysis service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Service endpoint, e.g. `https://myresource.cognitiveservices.azure.com`.
    pub endpoint: String,

    /// Subscription key sent with every request.
    pub api_key: String,

    /// Prebuilt document model used for analysis.
    pub model_id: String,

    /// Service API version.
    pub api_version: String,

    /// Maximum number of status polls before giving up.
    pub max_polls: u32,

    /// Delay between status polls in milliseconds.
    pub poll_interval_ms: u64,

    /// Timeout for a single HTTP request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            model_id: "prebuilt-businessCard".to_string(),
            api_version: "2023-07-31".to_string(),
            max_polls: 10,
            poll_interval_ms: 2000,
            request_timeout_secs: 30,
        }
    }
}

impl AnalysisConfig {
    /// Delay between status polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Full URL of the analyze operation.
    pub fn analyze_url(&self) -> String {
        format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.model_id,
            self.api_version
        )
    }

    /// Check that the service can be reached with these settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("analysis.endpoint is not set".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!(
                "analysis.endpoint must be an http(s) URL, got {}",
                self.endpoint
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err("analysis.api_key is not set".to_string());
        }
        if self.max_polls == 0 {
            return Err("analysis.max_polls must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Exchange codec configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Format used when encoding the profile for display.
    pub default_format: PayloadFormat,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_format: PayloadFormat::Json,
        }
    }
}

/// Local storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File holding saved card records.
    pub cards_file: PathBuf,

    /// File holding the user's own profile.
    pub profile_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cards_file: PathBuf::from("cards.json"),
            profile_file: PathBuf::from("profile.json"),
        }
    }
}

impl StorageConfig {
    /// Resolve the cards file against a data directory.
    pub fn cards_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.cards_file)
    }

    /// Resolve the profile file against a data directory.
    pub fn profile_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.profile_file)
    }
}

impl CardscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_polling_budget() {
        let config = CardscanConfig::default();
        assert_eq!(config.analysis.max_polls, 10);
        assert_eq!(config.analysis.poll_interval(), Duration::from_secs(2));
        assert_eq!(config.codec.default_format, PayloadFormat::Json);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CardscanConfig =
            serde_json::from_str(r#"{"analysis": {"endpoint": "https://x.example"}}"#).unwrap();
        assert_eq!(config.analysis.endpoint, "https://x.example");
        assert_eq!(config.analysis.model_id, "prebuilt-businessCard");
        assert_eq!(config.storage.cards_file, PathBuf::from("cards.json"));
    }

    #[test]
    fn test_analyze_url() {
        let config = AnalysisConfig {
            endpoint: "https://res.cognitiveservices.azure.com/".to_string(),
            ..AnalysisConfig::default()
        };
        assert_eq!(
            config.analyze_url(),
            "https://res.cognitiveservices.azure.com/formrecognizer/documentModels/prebuilt-businessCard:analyze?api-version=2023-07-31"
        );
    }

    #[test]
    fn test_validate() {
        let mut config = AnalysisConfig::default();
        assert!(config.validate().is_err());

        config.endpoint = "https://res.example".to_string();
        assert!(config.validate().unwrap_err().contains("api_key"));

        config.api_key = "secret".to_string();
        assert!(config.validate().is_ok());

        config.max_polls = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CardscanConfig::default();
        config.analysis.api_key = "k".to_string();
        config.codec.default_format = PayloadFormat::VCard;
        config.save(&path).unwrap();

        let loaded = CardscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.analysis.api_key, "k");
        assert_eq!(loaded.codec.default_format, PayloadFormat::VCard);
    }
}

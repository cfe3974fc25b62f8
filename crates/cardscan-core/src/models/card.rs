//! Saved business card records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::contact::Contact;

/// A scanned card as kept in the local card store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Unique record identifier.
    pub id: String,

    /// The extracted contact.
    #[serde(flatten)]
    pub contact: Contact,

    /// Text the contact was extracted from (empty for decoded payloads).
    #[serde(default)]
    pub raw_text: String,

    /// Location of the captured image, if kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,

    /// When the card was captured.
    pub timestamp: DateTime<Utc>,

    /// Free-form user tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CardRecord {
    /// Create a new record with a fresh id and the current time.
    pub fn new(contact: Contact, raw_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            contact,
            raw_text: raw_text.into(),
            image_uri: None,
            timestamp: Utc::now(),
            tags: Vec::new(),
        }
    }

    /// Set the image location.
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Add a tag, ignoring duplicates.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }
}

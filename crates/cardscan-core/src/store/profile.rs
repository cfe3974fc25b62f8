//! The user's own profile, kept as a single contact JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CardscanError, Result};
use crate::models::contact::Contact;

/// File-backed store for the profile shown as the user's own code.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile, or `None` if none was saved yet.
    pub fn load(&self) -> Result<Option<Contact>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let contact: Contact = serde_json::from_str(&content)?;
        Ok(Some(contact))
    }

    /// Save the profile. A profile must carry a name.
    pub fn save(&self, contact: &Contact) -> Result<()> {
        let contact = contact.trimmed();
        if !contact.is_valid() {
            return Err(CardscanError::InvalidContact(
                "profile name must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(&contact)?)?;
        debug!("Saved profile to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        assert_eq!(store.load().unwrap(), None);

        let profile = Contact {
            email: " me@example.com ".to_string(),
            ..Contact::named("Me")
        };
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.name, "Me");
        assert_eq!(loaded.email, "me@example.com");
    }

    #[test]
    fn test_nameless_profile_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        let err = store.save(&Contact::named("  ")).unwrap_err();
        assert!(matches!(err, CardscanError::InvalidContact(_)));
        assert!(!store.path().exists());
    }
}

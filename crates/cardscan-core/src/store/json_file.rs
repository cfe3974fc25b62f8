//! Card store backed by a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::card::CardRecord;

use super::CardStore;

/// Keeps all cards as one JSON array on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable store is moved before it is overwritten.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Move an existing file that does not parse out of the way, so a write
    /// never replaces cards that could not be read.
    fn preserve_unreadable(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty()
            || serde_json::from_str::<Vec<CardRecord>>(&content).is_ok()
        {
            return Ok(());
        }

        let backup = self.backup_path();
        fs::rename(&self.path, &backup)?;
        warn!(
            "Moved unreadable card store {} to {}",
            self.path.display(),
            backup.display()
        );
        Ok(())
    }
}

impl CardStore for JsonFileStore {
    /// A missing file holds no cards. An unreadable file is logged and
    /// treated as empty; it is moved to [`JsonFileStore::backup_path`] on the
    /// next save.
    fn load_all(&self) -> Result<Vec<CardRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<CardRecord>>(&content) {
            Ok(cards) => {
                debug!("Loaded {} cards from {}", cards.len(), self.path.display());
                Ok(cards)
            }
            Err(e) => {
                warn!("Ignoring unreadable card store {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, cards: &[CardRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.preserve_unreadable()?;

        let content = serde_json::to_string_pretty(cards)?;
        fs::write(&self.path, content)?;
        debug!("Saved {} cards to {}", cards.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::models::contact::Contact;

    fn store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("cards.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_load() {
        let (_dir, store) = store();
        let first = CardRecord::new(Contact::named("Jane"), "Jane");
        let second = CardRecord::new(Contact::named("John"), "John");

        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        assert_eq!(store.load_all().unwrap(), vec![first.clone(), second]);
        assert_eq!(store.get(&first.id).unwrap(), Some(first));
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_update_and_delete() {
        let (_dir, store) = store();
        let card = CardRecord::new(Contact::named("Jane"), "");
        store.append(card.clone()).unwrap();

        let mut edited = card.clone();
        edited.contact.email = "jane@globex.com".to_string();
        store.update(edited.clone()).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![edited]);

        let stranger = CardRecord::new(Contact::named("Stranger"), "");
        assert!(matches!(
            store.update(stranger),
            Err(crate::error::CardscanError::CardNotFound(_))
        ));

        store.delete(&card.id).unwrap();
        store.delete("unknown").unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_unreadable_file_as_backup() {
        let (_dir, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        let corrupt = r#"[{"id":"1","name":"Old","timestamp":"2024-01-01T00:00:00Z"},]"#;
        fs::write(store.path(), corrupt).unwrap();

        let card = CardRecord::new(Contact::named("New"), "");
        store.append(card.clone()).unwrap();

        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), corrupt);
        assert_eq!(store.load_all().unwrap(), vec![card]);
    }

    #[test]
    fn test_readable_file_is_not_backed_up() {
        let (_dir, store) = store();
        store.append(CardRecord::new(Contact::named("Jane"), "")).unwrap();
        store.append(CardRecord::new(Contact::named("John"), "")).unwrap();

        assert!(!store.backup_path().exists());
        assert_eq!(store.load_all().unwrap().len(), 2);
    }
}

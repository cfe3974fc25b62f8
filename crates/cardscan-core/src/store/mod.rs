//! Local persistence of scanned cards.

mod json_file;
mod profile;

pub use json_file::JsonFileStore;
pub use profile::ProfileStore;

use crate::error::{CardscanError, Result};
use crate::models::card::CardRecord;

/// Storage of saved card records.
pub trait CardStore {
    /// Load every saved card, oldest first.
    fn load_all(&self) -> Result<Vec<CardRecord>>;

    /// Replace the stored cards.
    fn save_all(&self, cards: &[CardRecord]) -> Result<()>;

    /// Add a card at the end.
    fn append(&self, card: CardRecord) -> Result<()> {
        let mut cards = self.load_all()?;
        cards.push(card);
        self.save_all(&cards)
    }

    /// Find a card by id.
    fn get(&self, id: &str) -> Result<Option<CardRecord>> {
        Ok(self.load_all()?.into_iter().find(|c| c.id == id))
    }

    /// Remove a card by id. Removing an unknown id is not an error.
    fn delete(&self, id: &str) -> Result<()> {
        let mut cards = self.load_all()?;
        cards.retain(|c| c.id != id);
        self.save_all(&cards)
    }

    /// Replace the card that has the same id.
    fn update(&self, card: CardRecord) -> Result<()> {
        let mut cards = self.load_all()?;
        let slot = cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or_else(|| CardscanError::CardNotFound(card.id.clone()))?;
        *slot = card;
        self.save_all(&cards)
    }
}

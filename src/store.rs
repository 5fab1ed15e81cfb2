//! Card store interface and in-memory implementation.

use crate::error::StoreError;
use crate::types::{Card, CardId, Deck, DeckId};

/// Read/write access to the card collection.
///
/// The core needs only key-value semantics; durable backends live in the
/// surrounding application and map their failures to
/// [`StoreError::Backend`]. Deleting an absent id is a no-op.
pub trait CardStore {
    fn list_cards(&self) -> Result<Vec<Card>, StoreError>;

    fn cards_in_deck(&self, deck_id: DeckId) -> Result<Vec<Card>, StoreError>;

    fn get_card(&self, id: CardId) -> Result<Option<Card>, StoreError>;

    /// Insert or replace by id.
    fn put_card(&mut self, card: Card) -> Result<(), StoreError>;

    fn delete_card(&mut self, id: CardId) -> Result<(), StoreError>;

    /// Cascade deletion when a deck is removed.
    fn delete_cards_in_deck(&mut self, deck_id: DeckId) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and by callers that persist elsewhere.
///
/// Preserves insertion order, which keeps seeded-rng sampling deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    decks: Vec<Deck>,
    cards: Vec<Card>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a deck by id.
    pub fn put_deck(&mut self, deck: Deck) {
        match self.decks.iter_mut().find(|d| d.id == deck.id) {
            Some(existing) => *existing = deck,
            None => self.decks.push(deck),
        }
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Remove a deck and all of its cards. Absent id is a no-op.
    pub fn delete_deck(&mut self, id: DeckId) {
        self.decks.retain(|d| d.id != id);
        self.cards.retain(|c| c.deck_id != id);
    }
}

impl CardStore for MemoryStore {
    fn list_cards(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.cards.clone())
    }

    fn cards_in_deck(&self, deck_id: DeckId) -> Result<Vec<Card>, StoreError> {
        Ok(self
            .cards
            .iter()
            .filter(|c| c.deck_id == deck_id)
            .cloned()
            .collect())
    }

    fn get_card(&self, id: CardId) -> Result<Option<Card>, StoreError> {
        Ok(self.cards.iter().find(|c| c.id == id).cloned())
    }

    fn put_card(&mut self, card: Card) -> Result<(), StoreError> {
        match self.cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
        Ok(())
    }

    fn delete_card(&mut self, id: CardId) -> Result<(), StoreError> {
        self.cards.retain(|c| c.id != id);
        Ok(())
    }

    fn delete_cards_in_deck(&mut self, deck_id: DeckId) -> Result<(), StoreError> {
        self.cards.retain(|c| c.deck_id != deck_id);
        Ok(())
    }
}

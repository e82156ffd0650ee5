//! In-memory card storage.

use std::sync::Arc;

use passcards_core::{CardDraft, CardId, PasswordCard};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Cards kept in insertion order behind an async mutex.
#[derive(Clone, Default)]
pub struct CardRepository {
    cards: Arc<Mutex<Vec<PasswordCard>>>,
}

impl CardRepository {
    pub async fn list(&self) -> Vec<PasswordCard> {
        self.cards.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.cards.lock().await.len()
    }

    /// Store a new card under a fresh random ID.
    pub async fn create(&self, draft: CardDraft) -> PasswordCard {
        let card = PasswordCard::from_draft(CardId::new(Uuid::new_v4().to_string()), draft);
        self.cards.lock().await.push(card.clone());
        card
    }

    /// Replace the fields of an existing card. `None` when the ID is unknown.
    pub async fn update(&self, id: &CardId, draft: CardDraft) -> Option<PasswordCard> {
        let mut cards = self.cards.lock().await;
        let stored = cards.iter_mut().find(|card| &card.id == id)?;
        *stored = PasswordCard::from_draft(id.clone(), draft);
        Some(stored.clone())
    }

    /// Remove a card. Returns whether anything was removed.
    pub async fn delete(&self, id: &CardId) -> bool {
        let mut cards = self.cards.lock().await;
        let before = cards.len();
        cards.retain(|card| &card.id != id);
        cards.len() != before
    }
}

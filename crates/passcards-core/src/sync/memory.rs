//! In-process card service.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::models::{CardDraft, CardId, PasswordCard};
use crate::sync::CardApi;

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<PasswordCard>,
    next_id: u64,
    fail_status: Option<u16>,
    calls: Vec<String>,
}

impl MemoryState {
    /// Next `card-{n}` not already taken by a seeded or created record.
    fn fresh_id(&mut self) -> CardId {
        loop {
            self.next_id += 1;
            let id = CardId::new(format!("card-{}", self.next_id));
            if !self.records.iter().any(|record| record.id == id) {
                return id;
            }
        }
    }
}

/// A [`CardApi`] that keeps cards in memory and behaves like the REST service:
/// sequential IDs, 404 on updating an unknown card, idempotent delete.
///
/// Used by tests and headless runs; `fail_with` makes every call answer with
/// the given HTTP status until cleared.
#[derive(Debug, Clone, Default)]
pub struct MemoryCardApi {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryCardApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<PasswordCard>) -> Self {
        let api = Self::new();
        {
            let mut state = api.lock();
            state.next_id = records.len() as u64;
            state.records = records;
        }
        api
    }

    /// Make every following call fail with `status`, or succeed again with `None`.
    pub fn fail_with(&self, status: Option<u16>) {
        self.lock().fail_status = status;
    }

    /// Cards as the service currently holds them.
    #[must_use]
    pub fn records(&self) -> Vec<PasswordCard> {
        self.lock().records.clone()
    }

    /// Calls received so far, e.g. `"list"` or `"update <id>"`.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn begin(&self, call: String) -> Result<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.fail_status {
            Some(status) => Err(Error::Status {
                status,
                body: String::new(),
            }),
            None => Ok(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CardApi for MemoryCardApi {
    async fn list(&self) -> Result<Vec<PasswordCard>> {
        let state = self.begin("list".to_string())?;
        Ok(state.records.clone())
    }

    async fn create(&self, draft: &CardDraft) -> Result<PasswordCard> {
        let mut state = self.begin("create".to_string())?;
        let id = state.fresh_id();
        let card = PasswordCard::from_draft(id, draft.clone());
        state.records.push(card.clone());
        Ok(card)
    }

    async fn update(&self, card: &PasswordCard) -> Result<()> {
        let mut state = self.begin(format!("update {}", card.id))?;
        let Some(stored) = state.records.iter_mut().find(|stored| stored.id == card.id) else {
            return Err(Error::Status {
                status: 404,
                body: "Card not found".to_string(),
            });
        };
        *stored = card.clone();
        Ok(())
    }

    async fn delete(&self, id: &CardId) -> Result<()> {
        let mut state = self.begin(format!("delete {id}"))?;
        state.records.retain(|stored| &stored.id != id);
        Ok(())
    }
}

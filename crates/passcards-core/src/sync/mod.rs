//! Sync layer between user intents and the card service.
//!
//! Each operation performs one request and, only when it succeeds, patches
//! the shared [`RecordStore`]. Failures are logged and handed back to the
//! caller; the store is never touched on failure and nothing is retried.

mod http;
mod memory;

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use http::HttpCardApi;
pub use memory::MemoryCardApi;

use crate::error::Result;
use crate::models::{CardDraft, CardId, PasswordCard};
use crate::store::RecordStore;

/// Remote CRUD operations on password cards.
pub trait CardApi: Send + Sync {
    /// Fetch every card.
    fn list(&self) -> impl Future<Output = Result<Vec<PasswordCard>>> + Send;

    /// Create a card; the service assigns the ID.
    fn create(&self, draft: &CardDraft) -> impl Future<Output = Result<PasswordCard>> + Send;

    /// Replace the card with the same ID.
    fn update(&self, card: &PasswordCard) -> impl Future<Output = Result<()>> + Send;

    /// Delete a card by ID.
    fn delete(&self, id: &CardId) -> impl Future<Output = Result<()>> + Send;
}

/// What a successful update did to the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The store entry now holds the submitted record.
    Applied,
    /// The card is no longer in the store, so there was nothing to patch.
    Missing,
    /// A newer update for the same card was issued meanwhile; this one was dropped.
    Stale,
}

/// Tickets of one card while it has updates in flight.
#[derive(Debug, Default)]
struct CardTickets {
    in_flight: usize,
    applied: u64,
}

/// Issues per-card update tickets so late responses can be recognised.
///
/// A response is stale only when an update issued after it has already been
/// applied; failed updates never shadow older ones. Entries are dropped once
/// a card has no update in flight.
#[derive(Debug, Default)]
struct StaleGuard {
    counter: AtomicU64,
    cards: Mutex<HashMap<CardId, CardTickets>>,
}

impl StaleGuard {
    fn issue(&self, id: &CardId) -> u64 {
        let ticket = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.lock().entry(id.clone()).or_default().in_flight += 1;
        ticket
    }

    /// Retire `ticket`; returns whether a successful response should be applied.
    fn settle(&self, id: &CardId, ticket: u64, succeeded: bool) -> bool {
        let mut cards = self.lock();
        let Some(tickets) = cards.get_mut(id) else {
            return succeeded;
        };

        let apply = succeeded && ticket > tickets.applied;
        if apply {
            tickets.applied = ticket;
        }
        tickets.in_flight = tickets.in_flight.saturating_sub(1);
        if tickets.in_flight == 0 {
            cards.remove(id);
        }
        apply
    }

    #[cfg(test)]
    fn tracked_cards(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CardId, CardTickets>> {
        self.cards.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Binds a [`CardApi`] to the record store it keeps in sync.
#[derive(Debug, Clone)]
pub struct SyncLayer<A> {
    api: A,
    store: RecordStore,
    stale_guard: Option<Arc<StaleGuard>>,
}

impl<A: CardApi> SyncLayer<A> {
    pub fn new(api: A, store: RecordStore) -> Self {
        Self {
            api,
            store,
            stale_guard: None,
        }
    }

    /// Drop update responses that resolve after a newer update to the same card
    /// has already been applied.
    ///
    /// Without the guard, concurrent updates land in resolution order.
    #[must_use]
    pub fn with_stale_guard(mut self, enabled: bool) -> Self {
        self.stale_guard = enabled.then(|| Arc::new(StaleGuard::default()));
        self
    }

    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Fetch every card and replace the store with them.
    pub async fn load(&self) -> Result<usize> {
        match self.api.list().await {
            Ok(records) => {
                let count = records.len();
                self.store.replace_all(records);
                tracing::info!("Loaded {} password cards", count);
                Ok(count)
            }
            Err(error) => {
                tracing::error!("Failed to load password cards: {}", error);
                Err(error)
            }
        }
    }

    /// Create a card and append the service's copy (with its new ID).
    pub async fn create(&self, draft: &CardDraft) -> Result<PasswordCard> {
        match self.api.create(draft).await {
            Ok(card) => {
                tracing::info!(card = %card.id, "Created password card");
                self.store.append(card.clone());
                Ok(card)
            }
            Err(error) => {
                tracing::error!("Failed to create password card: {}", error);
                Err(error)
            }
        }
    }

    /// Send `card` and, on success, store the submitted record as-is.
    pub async fn update(&self, card: PasswordCard) -> Result<UpdateOutcome> {
        let ticket = self
            .stale_guard
            .as_ref()
            .map(|guard| guard.issue(&card.id));

        let result = self.api.update(&card).await;
        let apply = match (self.stale_guard.as_ref(), ticket) {
            (Some(guard), Some(ticket)) => guard.settle(&card.id, ticket, result.is_ok()),
            _ => true,
        };

        if let Err(error) = result {
            tracing::error!(card = %card.id, "Failed to update password card: {}", error);
            return Err(error);
        }
        if !apply {
            tracing::warn!(card = %card.id, "Discarding stale update response");
            return Ok(UpdateOutcome::Stale);
        }

        let id = card.id.clone();
        if self.store.update_by_id(&id, card) {
            tracing::info!(card = %id, "Updated password card");
            Ok(UpdateOutcome::Applied)
        } else {
            tracing::debug!(card = %id, "Updated card is no longer in the store");
            Ok(UpdateOutcome::Missing)
        }
    }

    /// Delete a card and drop it from the store.
    pub async fn delete(&self, id: &CardId) -> Result<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                if self.store.remove_by_id(id) {
                    tracing::info!(card = %id, "Deleted password card");
                }
                Ok(())
            }
            Err(error) => {
                tracing::error!(card = %id, "Failed to delete password card: {}", error);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    use crate::card_view::CardView;
    use crate::creation_form::CreationForm;
    use crate::error::Error;
    use crate::models::CardField;
    use pretty_assertions::assert_eq;

    /// Holds update calls back by a queued delay before delegating.
    #[derive(Clone)]
    struct DelayedApi {
        inner: MemoryCardApi,
        update_delays: Arc<Mutex<VecDeque<Duration>>>,
        update_failures: Arc<Mutex<VecDeque<Option<u16>>>>,
    }

    impl DelayedApi {
        fn new(inner: MemoryCardApi, delays: impl IntoIterator<Item = Duration>) -> Self {
            Self {
                inner,
                update_delays: Arc::new(Mutex::new(delays.into_iter().collect())),
                update_failures: Arc::default(),
            }
        }

        /// Answer the queued update calls with these statuses (`None` passes through).
        fn failing(self, statuses: impl IntoIterator<Item = Option<u16>>) -> Self {
            self.update_failures.lock().unwrap().extend(statuses);
            self
        }
    }

    impl CardApi for DelayedApi {
        async fn list(&self) -> Result<Vec<PasswordCard>> {
            self.inner.list().await
        }

        async fn create(&self, draft: &CardDraft) -> Result<PasswordCard> {
            self.inner.create(draft).await
        }

        async fn update(&self, card: &PasswordCard) -> Result<()> {
            let delay = self.update_delays.lock().unwrap().pop_front();
            let failure = self.update_failures.lock().unwrap().pop_front().flatten();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match failure {
                Some(status) => Err(Error::Status {
                    status,
                    body: String::new(),
                }),
                None => self.inner.update(card).await,
            }
        }

        async fn delete(&self, id: &CardId) -> Result<()> {
            self.inner.delete(id).await
        }
    }

    fn card(id: &str, name: &str) -> PasswordCard {
        PasswordCard::from_draft(
            CardId::new(id),
            CardDraft::new(name, format!("{}.com", name.to_lowercase()), "u", "p"),
        )
    }

    fn bank() -> PasswordCard {
        PasswordCard::from_draft(
            CardId::new("1"),
            CardDraft::new("Bank", "bank.com", "u", "p"),
        )
    }

    async fn loaded<A: CardApi>(api: A) -> SyncLayer<A> {
        let sync = SyncLayer::new(api, RecordStore::new());
        sync.load().await.unwrap();
        sync
    }

    #[tokio::test]
    async fn load_replaces_store_wholesale() {
        let api = MemoryCardApi::with_records(vec![card("1", "Bank"), card("2", "Mail")]);
        let sync = SyncLayer::new(api, RecordStore::with_records(vec![card("x", "Old")]));

        assert_eq!(sync.load().await.unwrap(), 2);
        assert_eq!(
            sync.store().records(),
            vec![card("1", "Bank"), card("2", "Mail")]
        );
    }

    #[tokio::test]
    async fn failed_load_leaves_store_untouched() {
        let api = MemoryCardApi::with_records(vec![card("1", "Bank")]);
        api.fail_with(Some(503));
        let sync = SyncLayer::new(api, RecordStore::new());

        let err = sync.load().await.unwrap_err();
        assert!(err.is_request_failure());
        assert!(sync.store().is_empty());
        assert_eq!(sync.store().version(), 0);
    }

    #[tokio::test]
    async fn create_appends_service_record_with_fresh_id() {
        let sync = loaded(MemoryCardApi::with_records(vec![card("card-1", "Bank")])).await;

        let mut form = CreationForm::new();
        form.set_field(CardField::Name, "X");
        form.set_field(CardField::Url, "x.io");
        form.set_field(CardField::Username, "xu");
        form.set_field(CardField::Password, "xp");
        let draft = form.submit();
        assert!(form.is_blank());

        let created = sync.create(&draft).await.unwrap();
        assert_eq!(created.to_draft(), draft);
        assert_ne!(created.id, CardId::new("card-1"));
        assert_eq!(sync.store().len(), 2);
        assert_eq!(sync.store().records().last(), Some(&created));
        assert_eq!(sync.store().filtered("x"), vec![created]);
    }

    #[tokio::test]
    async fn failed_create_keeps_store_but_form_is_already_reset() {
        let api = MemoryCardApi::new();
        api.fail_with(Some(500));
        let sync = SyncLayer::new(api, RecordStore::new());

        let mut form = CreationForm::new();
        form.set_field(CardField::Name, "Bank");
        let draft = form.submit();

        assert!(sync.create(&draft).await.is_err());
        assert!(sync.store().is_empty());
        assert!(form.is_blank());
    }

    #[tokio::test]
    async fn successful_edit_patches_store_with_submitted_record() {
        let sync = loaded(MemoryCardApi::with_records(vec![bank()])).await;

        let mut view = CardView::new();
        view.begin_edit(&bank());
        view.set_field(CardField::Name, "Bank2");
        let submitted = view.submit_edit().unwrap();
        assert!(!view.is_editing());

        assert_eq!(
            sync.update(submitted).await.unwrap(),
            UpdateOutcome::Applied
        );
        let mut expected = bank();
        expected.name = "Bank2".to_string();
        assert_eq!(sync.store().records(), vec![expected]);
    }

    #[tokio::test]
    async fn rename_moves_card_between_search_results() {
        let sync = loaded(MemoryCardApi::with_records(vec![
            card("1", "Savings"),
            card("2", "Mail"),
        ]))
        .await;

        sync.update(card("1", "Checking")).await.unwrap();
        assert!(sync.store().filtered("savings").is_empty());
        assert_eq!(sync.store().filtered("check"), vec![card("1", "Checking")]);
    }

    #[tokio::test]
    async fn failed_edit_keeps_old_record_while_edit_mode_already_ended() {
        let api = MemoryCardApi::with_records(vec![bank()]);
        let sync = loaded(api.clone()).await;
        api.fail_with(Some(500));

        let mut view = CardView::new();
        view.begin_edit(&bank());
        view.set_field(CardField::Name, "Bank2");
        let submitted = view.submit_edit().unwrap();

        let err = sync.update(submitted).await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 500, .. }));
        assert_eq!(sync.store().records(), vec![bank()]);
        assert!(!view.is_editing());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let api = MemoryCardApi::with_records(vec![card("1", "Bank"), card("2", "Mail")]);
        let sync = loaded(api.clone()).await;

        sync.delete(&CardId::new("1")).await.unwrap();
        assert_eq!(sync.store().records(), vec![card("2", "Mail")]);

        sync.delete(&CardId::new("404")).await.unwrap();
        assert_eq!(sync.store().len(), 1);
        assert_eq!(api.calls(), vec!["list", "delete 1", "delete 404"]);
    }

    #[tokio::test]
    async fn failed_delete_keeps_record() {
        let api = MemoryCardApi::with_records(vec![card("1", "Bank")]);
        let sync = loaded(api.clone()).await;
        api.fail_with(Some(500));

        assert!(sync.delete(&CardId::new("1")).await.is_err());
        assert_eq!(sync.store().len(), 1);
    }

    #[tokio::test]
    async fn update_of_card_removed_meanwhile_reports_missing() {
        let sync = loaded(MemoryCardApi::with_records(vec![card("1", "Bank")])).await;
        sync.store().remove_by_id(&CardId::new("1"));

        assert_eq!(
            sync.update(card("1", "Bank2")).await.unwrap(),
            UpdateOutcome::Missing
        );
        assert!(sync.store().is_empty());
    }

    #[tokio::test]
    async fn late_update_response_wins_without_guard() {
        let api = DelayedApi::new(
            MemoryCardApi::with_records(vec![card("1", "Bank")]),
            [Duration::from_millis(40), Duration::ZERO],
        );
        let sync = loaded(api).await;

        let (first, second) = tokio::join!(
            sync.update(card("1", "First")),
            sync.update(card("1", "Second")),
        );
        assert_eq!(first.unwrap(), UpdateOutcome::Applied);
        assert_eq!(second.unwrap(), UpdateOutcome::Applied);
        assert_eq!(sync.store().records(), vec![card("1", "First")]);
    }

    #[tokio::test]
    async fn stale_guard_discards_late_update_response() {
        let api = DelayedApi::new(
            MemoryCardApi::with_records(vec![card("1", "Bank")]),
            [Duration::from_millis(40), Duration::ZERO],
        );
        let sync = loaded(api).await.with_stale_guard(true);

        let (first, second) = tokio::join!(
            sync.update(card("1", "First")),
            sync.update(card("1", "Second")),
        );
        assert_eq!(first.unwrap(), UpdateOutcome::Stale);
        assert_eq!(second.unwrap(), UpdateOutcome::Applied);
        assert_eq!(sync.store().records(), vec![card("1", "Second")]);
    }

    #[tokio::test]
    async fn stale_guard_applies_older_update_when_newer_one_fails() {
        let api = DelayedApi::new(
            MemoryCardApi::with_records(vec![card("1", "Bank")]),
            [Duration::from_millis(40), Duration::ZERO],
        )
        .failing([None, Some(500)]);
        let sync = loaded(api).await.with_stale_guard(true);

        let (first, second) = tokio::join!(
            sync.update(card("1", "First")),
            sync.update(card("1", "Second")),
        );
        assert_eq!(first.unwrap(), UpdateOutcome::Applied);
        assert!(second.is_err());
        assert_eq!(sync.api().inner.records(), vec![card("1", "First")]);
        assert_eq!(sync.store().records(), sync.api().inner.records());
    }

    #[tokio::test]
    async fn stale_guard_forgets_cards_once_updates_settle() {
        let api = MemoryCardApi::with_records(vec![card("1", "Bank"), card("2", "Mail")]);
        let sync = loaded(api).await.with_stale_guard(true);

        sync.update(card("1", "Bank2")).await.unwrap();
        sync.api().fail_with(Some(503));
        assert!(sync.update(card("2", "Mail2")).await.is_err());

        let guard = sync.stale_guard.as_ref().unwrap();
        assert_eq!(guard.tracked_cards(), 0);
    }

    #[tokio::test]
    async fn stale_guard_is_per_card() {
        let api = DelayedApi::new(
            MemoryCardApi::with_records(vec![card("1", "Bank"), card("2", "Mail")]),
            [Duration::from_millis(20), Duration::ZERO],
        );
        let sync = loaded(api).await.with_stale_guard(true);

        let (first, second) = tokio::join!(
            sync.update(card("1", "Bank2")),
            sync.update(card("2", "Mail2")),
        );
        assert_eq!(first.unwrap(), UpdateOutcome::Applied);
        assert_eq!(second.unwrap(), UpdateOutcome::Applied);
        assert_eq!(
            sync.store().records(),
            vec![card("1", "Bank2"), card("2", "Mail2")]
        );
    }
}

//! Client-side record store.
//!
//! Holds the ordered cards currently known to the client. The store is a
//! cloneable handle: the sync layer and every view share one instance, and
//! views learn about changes through subscriptions instead of polling.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{CardId, PasswordCard};
use crate::search;

/// Handle returned by [`RecordStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a mutation did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Replaced { count: usize },
    Appended { id: CardId },
    Updated { id: CardId },
    Removed { id: CardId },
}

/// A store event together with the version it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub event: StoreEvent,
    pub version: u64,
}

type Listener = Arc<dyn Fn(&StoreChange) + Send + Sync>;

#[derive(Default)]
struct StoreState {
    records: Vec<PasswordCard>,
    version: u64,
}

/// Ordered, shared sequence of password cards.
#[derive(Clone, Default)]
pub struct RecordStore {
    state: Arc<RwLock<StoreState>>,
    listeners: Arc<Mutex<Vec<(SubscriptionId, Listener)>>>,
    next_subscription: Arc<AtomicU64>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: Vec<PasswordCard>) -> Self {
        let store = Self::new();
        store.write().records = records;
        store
    }

    /// Replace the whole store, as done on initial load.
    pub fn replace_all(&self, records: Vec<PasswordCard>) {
        let count = records.len();
        let version = {
            let mut state = self.write();
            state.records = records;
            bump(&mut state)
        };
        self.notify(StoreEvent::Replaced { count }, version);
    }

    /// Append a record at the end.
    pub fn append(&self, record: PasswordCard) {
        let id = record.id.clone();
        let version = {
            let mut state = self.write();
            state.records.push(record);
            bump(&mut state)
        };
        self.notify(StoreEvent::Appended { id }, version);
    }

    /// Replace the entry whose ID is `id`. Returns `false` when none matched.
    pub fn update_by_id(&self, id: &CardId, record: PasswordCard) -> bool {
        let version = {
            let mut state = self.write();
            let Some(slot) = state.records.iter_mut().find(|card| &card.id == id) else {
                return false;
            };
            *slot = record;
            bump(&mut state)
        };
        self.notify(StoreEvent::Updated { id: id.clone() }, version);
        true
    }

    /// Remove the entry whose ID is `id`. Returns `false` when none matched.
    pub fn remove_by_id(&self, id: &CardId) -> bool {
        let version = {
            let mut state = self.write();
            let before = state.records.len();
            state.records.retain(|card| &card.id != id);
            if state.records.len() == before {
                return false;
            }
            bump(&mut state)
        };
        self.notify(StoreEvent::Removed { id: id.clone() }, version);
        true
    }

    /// Snapshot of every record in store order.
    #[must_use]
    pub fn records(&self) -> Vec<PasswordCard> {
        self.read().records.clone()
    }

    /// Records whose name matches `term`, see [`search::filter`].
    #[must_use]
    pub fn filtered(&self, term: &str) -> Vec<PasswordCard> {
        search::filter(&self.read().records, term)
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<PasswordCard> {
        self.read().records.iter().find(|card| &card.id == id).cloned()
    }

    /// IDs starting with `prefix`, in store order.
    #[must_use]
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<CardId> {
        self.read()
            .records
            .iter()
            .filter(|card| card.id.as_str().starts_with(prefix))
            .map(|card| card.id.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// Number of effective mutations applied so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.read().version
    }

    /// Register a listener called after every effective mutation.
    pub fn subscribe(
        &self,
        listener: impl Fn(&StoreChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, event: StoreEvent, version: u64) {
        // Listeners may read the store, so no lock is held while they run.
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect::<Vec<_>>();
        tracing::debug!(?event, version, "Record store changed");

        let change = StoreChange { event, version };
        for listener in listeners {
            listener(&change);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        formatter
            .debug_struct("RecordStore")
            .field("records", &state.records)
            .field("version", &state.version)
            .finish_non_exhaustive()
    }
}

fn bump(state: &mut StoreState) -> u64 {
    state.version += 1;
    state.version
}

//! Application state shared through the Dioxus context

use dioxus::prelude::*;
use passcards_core::clipboard::SystemClipboard;
use passcards_core::{search, HttpCardApi, PasswordCard, SyncLayer};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Sync layer for the card service, once the client is configured
    pub sync: Signal<Option<SyncLayer<HttpCardApi>>>,
    /// Snapshot of the record store, refreshed on every store change
    pub cards: Signal<Vec<PasswordCard>>,
    /// Current search term
    pub search_term: Signal<String>,
    /// Last startup or load failure, shown above the list
    pub load_error: Signal<Option<String>>,
    /// System clipboard, opened on first copy and kept alive afterwards
    pub clipboard: Signal<Option<SystemClipboard>>,
}

impl AppState {
    /// Cards matching the current search term, in store order.
    #[must_use]
    pub fn filtered_cards(&self) -> Vec<PasswordCard> {
        visible_cards(&(self.cards)(), &(self.search_term)())
    }
}

/// Cards the list shows for a search box holding `term`.
pub fn visible_cards(cards: &[PasswordCard], term: &str) -> Vec<PasswordCard> {
    search::filter(cards, term)
}

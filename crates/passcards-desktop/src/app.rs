//! Main application component

use dioxus::prelude::*;
use passcards_core::config::ClientConfig;
use passcards_core::store::StoreChange;
use passcards_core::{HttpCardApi, RecordStore, SyncLayer};
use tokio::sync::mpsc;

use crate::components::{CardList, NewCardForm, SearchBar};
use crate::state::AppState;
use crate::theme::PALETTE;

fn open_sync() -> passcards_core::Result<SyncLayer<HttpCardApi>> {
    let config = ClientConfig::from_env()?;
    tracing::info!("Using card service at {}", config.api_base_url);
    Ok(SyncLayer::new(HttpCardApi::new(config)?, RecordStore::new()))
}

/// Root application component
#[component]
pub fn App() -> Element {
    let mut cards = use_signal(Vec::new);
    let search_term = use_signal(String::new);
    let mut sync = use_signal(|| None);
    let mut load_error = use_signal(|| None::<String>);
    let clipboard = use_signal(|| None);

    use_future(move || async move {
        let layer = match open_sync() {
            Ok(layer) => layer,
            Err(error) => {
                tracing::error!("Failed to configure card service: {}", error);
                load_error.set(Some(error.to_string()));
                return;
            }
        };

        let (sender, mut changes) = mpsc::unbounded_channel::<StoreChange>();
        // The listener keeps the only sender, so the loop below runs for the
        // lifetime of the window.
        layer.store().subscribe(move |change| {
            if sender.send(change.clone()).is_err() {
                tracing::debug!("Store listener outlived the card list");
            }
        });
        sync.set(Some(layer.clone()));

        if let Err(error) = layer.load().await {
            load_error.set(Some(format!("Could not load cards: {error}")));
        }

        while let Some(change) = changes.recv().await {
            tracing::debug!(version = change.version, "Store changed: {:?}", change.event);
            cards.set(layer.store().records());
        }
    });

    use_context_provider(|| AppState {
        sync,
        cards,
        search_term,
        load_error,
        clipboard,
    });

    let colors = PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",

            div {
                style: "max-width: 720px; margin: 0 auto; padding: 16px;",

                h1 { style: "font-size: 20px; margin: 0 0 12px;", "Password Cards" }

                if let Some(message) = load_error() {
                    div {
                        class: "load-error",
                        style: "
                            padding: 8px 12px;
                            margin-bottom: 12px;
                            border: 1px solid {colors.danger};
                            border-radius: 6px;
                            color: {colors.danger};
                        ",
                        "{message}"
                    }
                }

                SearchBar {}
                NewCardForm {}
                CardList {}
            }
        }
    }
}

use passcards_core::config::ClientConfig;
use passcards_core::{CardId, CardView, HttpCardApi, PasswordCard, RecordStore, SyncLayer};
use serde::Serialize;

use crate::error::CliError;

const SHORT_ID_LEN: usize = 13;

#[derive(Debug, Serialize)]
pub struct CardListItem {
    pub id: String,
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

/// Build the sync layer for the configured service and load every card.
pub async fn open_sync(api_url: Option<&str>) -> Result<SyncLayer<HttpCardApi>, CliError> {
    let config = match api_url {
        Some(url) => ClientConfig::with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!("Using card service at {}", config.api_base_url);

    let sync = SyncLayer::new(HttpCardApi::new(config)?, RecordStore::new());
    sync.load().await?;
    Ok(sync)
}

pub fn normalize_card_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyCardId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Find a card by exact ID, falling back to a unique ID prefix.
pub fn resolve_card(card_query: &str, store: &RecordStore) -> Result<PasswordCard, CliError> {
    let card_query = normalize_card_identifier(card_query)?;

    if let Some(card) = store.get(&CardId::new(card_query.clone())) {
        return Ok(card);
    }

    let matching_ids = store.ids_with_prefix(&card_query);
    match matching_ids.as_slice() {
        [] => Err(CliError::CardNotFound(card_query)),
        [id] => store
            .get(id)
            .ok_or_else(|| CliError::CardNotFound(card_query.clone())),
        _ => {
            let options = matching_ids
                .iter()
                .take(3)
                .map(|id| short_id(id.as_str()))
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousCardId(format!(
                "ID prefix '{card_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

pub fn card_to_list_item(card: &PasswordCard, view: &CardView) -> CardListItem {
    CardListItem {
        id: card.id.to_string(),
        name: card.name.clone(),
        url: card.url.clone(),
        username: card.username.clone(),
        password: view.displayed_password(card).to_string(),
    }
}

pub fn format_card_lines(cards: &[PasswordCard], view: &CardView) -> Vec<String> {
    cards
        .iter()
        .map(|card| {
            let id = short_id(card.id.as_str());
            let name = truncate(&card.name, 24);
            let username = truncate(&card.username, 20);
            let password = view.displayed_password(card);

            if card.url.is_empty() {
                format!("{id:<13}  {name:<24}  {username:<20}  {password}")
            } else {
                format!("{id:<13}  {name:<24}  {username:<20}  {password:<8}  {}", card.url)
            }
        })
        .collect()
}

pub fn print_cards(
    cards: &[PasswordCard],
    view: &CardView,
    as_json: bool,
) -> Result<(), CliError> {
    if as_json {
        let json_items = cards
            .iter()
            .map(|card| card_to_list_item(card, view))
            .collect::<Vec<CardListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if cards.is_empty() {
        println!("No cards");
    } else {
        for line in format_card_lines(cards, view) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = value.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

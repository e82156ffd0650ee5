use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] passcards_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Card ID cannot be empty")]
    EmptyCardId,
    #[error("Card not found for id/prefix: {0}")]
    CardNotFound(String),
    #[error("{0}")]
    AmbiguousCardId(String),
    #[error("Refusing to create a card with every field empty")]
    EmptyDraft,
    #[error("Nothing to change; pass at least one of --name, --url, --username, --password")]
    NoChanges,
}

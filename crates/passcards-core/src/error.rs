//! Error types for passcards-core

use thiserror::Error;

/// Result type alias using passcards-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in passcards-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure talking to the card service
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The card service answered with a non-2xx status
    #[error("HTTP error! status: {status}{}", format_body(.body))]
    Status { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Card not found
    #[error("Card not found: {0}")]
    NotFound(String),

    /// The platform refused clipboard access
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl Error {
    /// Whether this error came from the remote service rather than local state.
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

fn format_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" ({body})")
    }
}

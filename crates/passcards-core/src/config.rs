//! Client configuration.
//!
//! The card service lives on a fixed local endpoint by default; the
//! `PASSCARDS_API_URL` environment variable points clients elsewhere.

use std::collections::HashMap;
use std::env;

use crate::error::{Error, Result};
use crate::util::{has_http_scheme, non_blank};

/// Environment variable overriding the card service base URL.
pub const API_URL_VAR: &str = "PASSCARDS_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolved client configuration shared by the CLI and desktop app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match non_blank(lookup(API_URL_VAR)) {
            Some(url) => Self::with_base_url(url),
            None => Ok(Self::default()),
        }
    }

    /// Builds a config for an explicit base URL, e.g. from a `--api-url` flag.
    pub fn with_base_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(url.into())?,
        })
    }

    /// Endpoint for the card collection.
    #[must_use]
    pub fn cards_url(&self) -> String {
        format!("{}/password-cards", self.api_base_url)
    }

    /// Endpoint for a single card; the ID is percent-encoded as one path segment.
    #[must_use]
    pub fn card_url(&self, id: &str) -> String {
        format!(
            "{}/password-cards/{}",
            self.api_base_url,
            urlencoding::encode(id)
        )
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let url = non_blank(Some(raw))
        .ok_or_else(|| Error::Config("API base URL must not be empty".to_string()))?;
    if !has_http_scheme(&url) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_endpoint() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.cards_url(), "http://localhost:8080/password-cards");
    }

    #[test]
    fn env_override_is_trimmed() {
        let config = ClientConfig::from_lookup(|name| {
            (name == API_URL_VAR).then(|| " https://cards.example.com/ ".to_string())
        })
        .unwrap();
        assert_eq!(config.api_base_url, "https://cards.example.com");
        assert_eq!(
            config.card_url("abc"),
            "https://cards.example.com/password-cards/abc"
        );
    }

    #[test]
    fn card_url_encodes_id_as_single_segment() {
        let config = ClientConfig::default();
        assert_eq!(
            config.card_url("a/b?c#d e"),
            "http://localhost:8080/password-cards/a%2Fb%3Fc%23d%20e"
        );
        assert_eq!(
            config.card_url("0b6f3c1e-9d2a-4f5b-8c7d-1a2b3c4d5e6f"),
            "http://localhost:8080/password-cards/0b6f3c1e-9d2a-4f5b-8c7d-1a2b3c4d5e6f"
        );
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn rejects_url_without_scheme() {
        let err = ClientConfig::with_base_url("localhost:8080").unwrap_err();
        assert!(err.to_string().contains("http://"));
    }
}

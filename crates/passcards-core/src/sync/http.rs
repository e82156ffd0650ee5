//! HTTP client for the password-card service.

use reqwest::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{CardDraft, CardId, PasswordCard};
use crate::sync::CardApi;
use crate::util::error_snippet;

/// [`CardApi`] over the service's REST endpoints.
///
/// Any non-2xx answer is a failure; bodies of update and delete responses
/// are never read beyond the status.
#[derive(Debug, Clone)]
pub struct HttpCardApi {
    config: ClientConfig,
    client: Client,
}

impl HttpCardApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            config,
            client: Client::builder().build()?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

impl CardApi for HttpCardApi {
    async fn list(&self) -> Result<Vec<PasswordCard>> {
        let response = self
            .client
            .get(self.config.cards_url())
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let cards = response.json::<Option<Vec<PasswordCard>>>().await?;
        Ok(cards.unwrap_or_default())
    }

    async fn create(&self, draft: &CardDraft) -> Result<PasswordCard> {
        let response = self
            .client
            .post(self.config.cards_url())
            .header("Accept", "application/json")
            .json(draft)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<PasswordCard>().await?)
    }

    async fn update(&self, card: &PasswordCard) -> Result<()> {
        let response = self
            .client
            .put(self.config.card_url(card.id.as_str()))
            .json(card)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &CardId) -> Result<()> {
        let response = self
            .client
            .delete(self.config.card_url(id.as_str()))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        body: error_snippet(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_comes_from_config() {
        let api = HttpCardApi::new(ClientConfig::with_base_url("http://127.0.0.1:9/").unwrap())
            .unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_failure() {
        // Port 9 (discard) is closed on test hosts.
        let api = HttpCardApi::new(ClientConfig::with_base_url("http://127.0.0.1:9").unwrap())
            .unwrap();
        let err = api.list().await.unwrap_err();
        assert!(err.is_request_failure());
    }
}

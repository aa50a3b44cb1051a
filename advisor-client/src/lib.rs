//! # Advisor Client SDK
//!
//! A typed Rust client for the Exchange Advisor API.

use advisor_types::{Currency, ErrorResponse, ExchangeResponse};
use reqwest::Client;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exchange Advisor API client.
pub struct AdvisorClient {
    base_url: String,
    http: Client,
}

impl AdvisorClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Asks whether now is a good time to exchange `from` for `to`.
    pub async fn exchange(
        &self,
        from: Currency,
        to: Currency,
    ) -> Result<ExchangeResponse, ClientError> {
        let resp = self
            .http
            .get(format!("{}/v1/exchange", self.base_url))
            .query(&[("from", from.code()), ("to", to.code())])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.reason)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

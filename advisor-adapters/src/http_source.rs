//! HTTP rate source adapter.
//!
//! Talks to an exchangeratesapi.io-style REST API: `/latest` for current
//! quotes, `/{YYYY-MM-DD}` for dated ones, with `base` and `symbols` query
//! parameters selecting the pair.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use advisor_types::{Currency, RateQuote, RateSource, SourceError};

const LATEST_SEGMENT: &str = "latest";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rate source backed by a REST rates API.
pub struct HttpRateSource {
    base_url: String,
    http: Client,
}

impl HttpRateSource {
    /// Creates a new source against the given API root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_quote(
        &self,
        from: Currency,
        to: Currency,
        segment: &str,
    ) -> Result<RateQuote, SourceError> {
        let url = format!("{}/{}", self.base_url, segment);
        tracing::debug!(%url, %from, %to, "fetching quote");

        let response = self
            .http
            .get(&url)
            .query(&[("base", from.code()), ("symbols", to.code())])
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<RateQuote>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn quote_now(&self, from: Currency, to: Currency) -> Result<RateQuote, SourceError> {
        self.get_quote(from, to, LATEST_SEGMENT).await
    }

    async fn quote_as_of(
        &self,
        from: Currency,
        to: Currency,
        date: NaiveDate,
    ) -> Result<RateQuote, SourceError> {
        self.get_quote(from, to, &date.format(DATE_FORMAT).to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::StatusCode,
        routing::get,
    };

    /// Binds a canned API on a loopback port and returns its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Echoes the requested base and symbol back as the quote, so the tests
    /// can verify the query the adapter sent.
    fn echo_quote(date: &str, query: &HashMap<String, String>) -> serde_json::Value {
        let mut rates = serde_json::Map::new();
        rates.insert(query["symbols"].clone(), serde_json::json!(0.86));
        serde_json::json!({
            "base": query["base"],
            "date": date,
            "rates": rates,
        })
    }

    #[tokio::test]
    async fn test_latest_quote_hits_latest_segment_with_pair_query() {
        let app = Router::new().route(
            "/latest",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                Json(echo_quote("2026-08-05", &query))
            }),
        );
        let source = HttpRateSource::new(serve(app).await);

        let quote = source
            .quote_now(Currency::EUR, Currency::GBP)
            .await
            .unwrap();

        assert_eq!(quote.base, Currency::EUR);
        assert_eq!(quote.rate_for(Currency::GBP), Some(0.86));
    }

    #[tokio::test]
    async fn test_dated_quote_hits_date_segment() {
        let app = Router::new().route(
            "/{date}",
            get(
                |Path(date): Path<String>, Query(query): Query<HashMap<String, String>>| async move {
                    Json(echo_quote(&date, &query))
                },
            ),
        );
        let source = HttpRateSource::new(serve(app).await);
        let date = NaiveDate::from_ymd_opt(2026, 7, 29).unwrap();

        let quote = source
            .quote_as_of(Currency::EUR, Currency::GBP, date)
            .await
            .unwrap();

        // The server echoed the path segment, so the quote's date proves
        // which URL was requested.
        assert_eq!(quote.date, date);
        assert_eq!(quote.rate_for(Currency::GBP), Some(0.86));
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let app = Router::new().route(
            "/latest",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let source = HttpRateSource::new(serve(app).await);

        let err = source
            .quote_now(Currency::EUR, Currency::GBP)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let app = Router::new().route("/latest", get(|| async { "not json" }));
        let source = HttpRateSource::new(serve(app).await);

        let err = source
            .quote_now(Currency::EUR, Currency::GBP)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let source = HttpRateSource::new("http://127.0.0.1:1");

        let err = source
            .quote_now(Currency::EUR, Currency::GBP)
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::Transport(_)));
    }
}

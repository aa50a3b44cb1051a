//! Integration tests for the exchange endpoint.
//!
//! These tests drive the full router - validation, orchestration, and error
//! body mapping - with a canned rate source behind the real in-memory store
//! and system clock.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use advisor_adapters::{InMemoryStore, SystemClock};
use advisor_hex::{RateAdvisor, inbound::HttpServer};
use advisor_types::{Currency, RateQuote, RateSource, SourceError};

/// Canned source: fixed latest and historical rates, counts calls.
#[derive(Clone)]
struct CannedSource {
    latest_rate: f64,
    historical_rate: f64,
    calls: Arc<AtomicUsize>,
}

impl CannedSource {
    fn new(latest_rate: f64, historical_rate: f64) -> Self {
        Self {
            latest_rate,
            historical_rate,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn quote(&self, base: Currency, to: Currency, rate: f64) -> RateQuote {
        RateQuote {
            base,
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            rates: HashMap::from([(to, rate)]),
        }
    }
}

#[async_trait]
impl RateSource for CannedSource {
    async fn quote_now(&self, from: Currency, to: Currency) -> Result<RateQuote, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quote(from, to, self.latest_rate))
    }

    async fn quote_as_of(
        &self,
        from: Currency,
        to: Currency,
        _date: NaiveDate,
    ) -> Result<RateQuote, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quote(from, to, self.historical_rate))
    }
}

/// Source that always fails.
struct DownSource;

#[async_trait]
impl RateSource for DownSource {
    async fn quote_now(&self, _from: Currency, _to: Currency) -> Result<RateQuote, SourceError> {
        Err(SourceError::Transport("connection refused".into()))
    }

    async fn quote_as_of(
        &self,
        _from: Currency,
        _to: Currency,
        _date: NaiveDate,
    ) -> Result<RateQuote, SourceError> {
        Err(SourceError::Transport("connection refused".into()))
    }
}

fn valid_currencies() -> HashSet<Currency> {
    HashSet::from([Currency::EUR, Currency::USD, Currency::GBP])
}

fn server<S: RateSource + 'static>(source: S) -> HttpServer<S, InMemoryStore, SystemClock> {
    let service = RateAdvisor::new(
        source,
        InMemoryStore::new(),
        SystemClock,
        Duration::from_secs(600),
        Duration::from_secs(5),
    );
    HttpServer::new(service, valid_currencies())
}

fn exchange_request(query: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/v1/exchange?{query}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = server(CannedSource::new(0.9, 0.8)).router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_exchange_returns_advice() {
    let app = server(CannedSource::new(0.8, 0.9)).router();

    let response = app
        .oneshot(exchange_request("from=EUR&to=GBP"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["from"], "EUR");
    assert_eq!(json["to"], "GBP");
    assert_eq!(json["singleUnit"], 0.8);
    assert_eq!(json["shouldExchange"], true);
    assert!(json.get("dataDateTime").is_some());
}

#[tokio::test]
async fn test_second_request_is_served_from_cache() {
    let source = CannedSource::new(0.9, 0.8);
    let app = server(source.clone()).router();

    let first = app
        .clone()
        .oneshot(exchange_request("from=EUR&to=GBP"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(exchange_request("from=EUR&to=GBP"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    // One pair of upstream quotes despite two requests.
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_unknown_currency_is_rejected() {
    let app = server(CannedSource::new(0.9, 0.8)).router();

    let response = app
        .oneshot(exchange_request("from=ABC&to=GBP"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["reason"]
            .as_str()
            .unwrap()
            .contains("not a valid currency")
    );
}

#[tokio::test]
async fn test_currency_outside_configured_set_is_rejected() {
    // INR parses as a currency but is not in the configured valid set.
    let app = server(CannedSource::new(0.9, 0.8)).router();

    let response = app
        .oneshot(exchange_request("from=INR&to=GBP"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_same_currency_pair_is_rejected() {
    let app = server(CannedSource::new(0.9, 0.8)).router();

    let response = app
        .oneshot(exchange_request("from=EUR&to=EUR"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["reason"]
            .as_str()
            .unwrap()
            .contains("need to be different")
    );
}

#[tokio::test]
async fn test_missing_parameter_is_rejected() {
    let app = server(CannedSource::new(0.9, 0.8)).router();

    let response = app.oneshot(exchange_request("from=EUR")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["reason"]
            .as_str()
            .unwrap()
            .contains("missing query parameter 'to'")
    );
}

#[tokio::test]
async fn test_source_failure_maps_to_500_with_reason() {
    let app = server(DownSource).router();

    let response = app
        .oneshot(exchange_request("from=EUR&to=GBP"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(
        json["reason"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
}

#[tokio::test]
async fn test_rate_limiting_returns_429_when_exceeded() {
    let service = RateAdvisor::new(
        CannedSource::new(0.9, 0.8),
        InMemoryStore::new(),
        SystemClock,
        Duration::from_secs(600),
        Duration::from_secs(5),
    );
    let app = HttpServer::with_rate_limit(service, valid_currencies(), 2).router();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(exchange_request("from=EUR&to=GBP"))
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    let response = app
        .oneshot(exchange_request("from=EUR&to=GBP"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let json = body_json(response).await;
    assert!(json["reason"].as_str().unwrap().contains("Rate limit"));
}

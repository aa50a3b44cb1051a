//! HTTP request handlers.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use advisor_types::{
    AdvisorError, Clock, Currency, ErrorResponse, ExchangeResponse, RateSource, RateStore,
};

use crate::RateAdvisor;

/// Application state shared across handlers.
pub struct AppState<S: RateSource, C: RateStore, K: Clock> {
    pub service: RateAdvisor<S, C, K>,
    pub valid_currencies: HashSet<Currency>,
}

/// Wrapper to implement IntoResponse for handler errors (orphan rule workaround).
pub enum ApiError {
    /// Request validation failure, produced entirely by this layer.
    BadRequest(String),
    /// Orchestrator failure (Network, Parse, Timeout, Busy).
    Advisor(AdvisorError),
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        ApiError::Advisor(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Advisor(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(ErrorResponse { reason })).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Query parameters of `GET /v1/exchange`.
///
/// Both fields are optional at the extractor level so missing parameters get
/// the same `{"reason": ...}` body as other validation failures.
#[derive(Debug, Deserialize)]
pub struct ExchangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Exchange advisory for a currency pair.
#[tracing::instrument(skip(state))]
pub async fn exchange<S: RateSource, C: RateStore, K: Clock>(
    State(state): State<Arc<AppState<S, C, K>>>,
    Query(params): Query<ExchangeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (from, to) = parse_pair(&params, &state.valid_currencies)?;

    let advice = state.service.advise(from, to).await?;

    Ok(Json(ExchangeResponse {
        from,
        to,
        single_unit: advice.one_unit,
        should_exchange: advice.should_exchange,
        data_date_time: advice.observed_at,
    }))
}

fn parse_pair(
    params: &ExchangeParams,
    valid: &HashSet<Currency>,
) -> Result<(Currency, Currency), ApiError> {
    let from = parse_currency(params.from.as_deref(), "from", valid)?;
    let to = parse_currency(params.to.as_deref(), "to", valid)?;

    if from == to {
        return Err(ApiError::BadRequest(format!(
            "'from' and 'to' are both {from}, they need to be different"
        )));
    }

    Ok((from, to))
}

fn parse_currency(
    value: Option<&str>,
    name: &str,
    valid: &HashSet<Currency>,
) -> Result<Currency, ApiError> {
    let raw = value.ok_or_else(|| {
        ApiError::BadRequest(format!("missing query parameter '{name}'"))
    })?;

    let currency = raw
        .parse::<Currency>()
        .ok()
        .filter(|c| valid.contains(c))
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "'{raw}' is not a valid currency. Valid: {}",
                supported(valid)
            ))
        })?;

    Ok(currency)
}

fn supported(valid: &HashSet<Currency>) -> String {
    let mut codes: Vec<_> = valid.iter().map(Currency::code).collect();
    codes.sort_unstable();
    codes.join(", ")
}

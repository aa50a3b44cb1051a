//! Data Transfer Objects (DTOs) for the HTTP boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Currency;

/// Successful response body of `GET /v1/exchange`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
    pub from: Currency,
    pub to: Currency,
    /// Value of one unit of `from` in `to`
    pub single_unit: f64,
    /// Whether now is a comparatively favorable moment to exchange
    pub should_exchange: bool,
    /// When the served entry was computed - the cache timestamp, never "now"
    /// unless a refresh just happened
    pub data_date_time: DateTime<Utc>,
}

/// Body of every non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub reason: String,
}

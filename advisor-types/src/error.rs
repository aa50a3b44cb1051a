//! Error types for the exchange advisor.

use std::fmt;
use std::time::Duration;

use crate::domain::{Currency, PairKey};

/// Which of the two refresh fetches an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// The "as of now" quote.
    Latest,
    /// The quote from the reference point in the past.
    Historical,
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchKind::Latest => write!(f, "latest"),
            FetchKind::Historical => write!(f, "historical"),
        }
    }
}

/// Errors produced by a rate source adapter.
///
/// String-typed so this crate stays free of transport dependencies; the
/// adapter folds its client errors into these variants.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Errors surfaced by the rate orchestrator to the endpoint layer.
///
/// Every variant carries the currency pair and, where it applies, the fetch
/// identity, so the endpoint can produce a diagnostic message.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// The source transport failed or returned a non-success status.
    #[error("{fetch} quote for {pair} failed: {source}")]
    Fetch {
        fetch: FetchKind,
        pair: PairKey,
        source: SourceError,
    },

    /// A fetch succeeded but its quote lacks the requested target currency.
    #[error("{fetch} quote for {pair} has no rate for {currency}")]
    MissingCurrency {
        fetch: FetchKind,
        pair: PairKey,
        currency: Currency,
    },

    /// A fetch did not complete within the configured ceiling.
    #[error("{fetch} quote for {pair} did not arrive within {timeout:?}")]
    Timeout {
        fetch: FetchKind,
        pair: PairKey,
        timeout: Duration,
    },

    /// Another refresh holds the admission token and there is no cached
    /// entry to fall back to.
    #[error("a refresh is already in flight and no cached rate exists for {pair}")]
    Busy { pair: PairKey },
}

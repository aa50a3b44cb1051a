//! External rate source port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Currency, RateQuote};
use crate::error::SourceError;

/// Port trait for external rate providers.
///
/// Implementations may fail outright or return quotes whose rate map omits
/// the requested target; classifying either is the orchestrator's job.
/// Retry policy, if any, belongs to the implementation.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Quote for one unit of `from` against `to`, as of now.
    async fn quote_now(&self, from: Currency, to: Currency) -> Result<RateQuote, SourceError>;

    /// Quote for one unit of `from` against `to`, as of a past `date`.
    async fn quote_as_of(
        &self,
        from: Currency,
        to: Currency,
        date: NaiveDate,
    ) -> Result<RateQuote, SourceError>;
}

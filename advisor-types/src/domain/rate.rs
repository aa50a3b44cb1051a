//! Rate snapshots: the wire-level quote and the cached advisory entry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Currency;

/// A rate snapshot as returned by an external source.
///
/// `rates` maps target currencies to the value of one unit of `base`.
/// The map may omit the requested target; the orchestrator treats that as
/// a malformed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub base: Currency,
    pub date: NaiveDate,
    pub rates: HashMap<Currency, f64>,
}

impl RateQuote {
    /// Value of one unit of `base` in `target`, if the quote carries it.
    pub fn rate_for(&self, target: Currency) -> Option<f64> {
        self.rates.get(&target).copied()
    }
}

/// A computed advisory, stored in the cache and served to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedRate {
    /// Value of one unit of the `from` currency in the `to` currency.
    pub one_unit: f64,
    /// True when the pair was worth strictly more at the reference point
    /// than it is now.
    pub should_exchange: bool,
    /// When this entry was computed. Non-decreasing per pair across writes.
    pub observed_at: DateTime<Utc>,
}

//! Rate Orchestrator
//!
//! Decides, for each request, whether to serve a cached rate, refresh it, or
//! fall back to a stale value. Contains NO transport logic - the rate source,
//! cache store, and clock are injected ports.

use std::time::Duration;

use chrono::{NaiveDate, TimeDelta};
use tokio::sync::Semaphore;

use advisor_types::{
    AdvisorError, CachedRate, Clock, Currency, FetchKind, PairKey, RateSource, RateStore,
};

/// How far in the past the reference quote is taken from.
const REFERENCE_WINDOW_DAYS: i64 = 7;

/// Rate orchestrator.
///
/// Generic over `S: RateSource`, `C: RateStore`, `K: Clock` - the adapters
/// are injected at compile time. This enables:
/// - Swapping the upstream API without code changes
/// - Testing with scripted sources and a manual clock
/// - Compile-time checks for port implementation
pub struct RateAdvisor<S: RateSource, C: RateStore, K: Clock> {
    source: S,
    store: C,
    clock: K,
    /// Maximum age before a cached entry must be refreshed.
    valid_for: TimeDelta,
    /// Ceiling applied to each of the two refresh fetches individually.
    fetch_timeout: Duration,
    /// Single-slot refresh admission token. At most one refresh is in
    /// flight at any instant, across ALL currency pairs.
    refresh_gate: Semaphore,
}

impl<S: RateSource, C: RateStore, K: Clock> RateAdvisor<S, C, K> {
    /// Creates a new orchestrator with the given ports.
    pub fn new(source: S, store: C, clock: K, valid_for: Duration, fetch_timeout: Duration) -> Self {
        Self {
            source,
            store,
            clock,
            valid_for: TimeDelta::from_std(valid_for).unwrap_or(TimeDelta::MAX),
            fetch_timeout,
            refresh_gate: Semaphore::new(1),
        }
    }

    /// Answers one exchange request for the (from, to) pair.
    ///
    /// A cached entry younger than the validity window is served directly,
    /// with zero network activity. A stale or absent entry triggers a
    /// refresh, unless another refresh already holds the admission token -
    /// then the stale entry is served as a best-effort fallback, or `Busy`
    /// is returned when there is nothing to serve.
    pub async fn advise(&self, from: Currency, to: Currency) -> Result<CachedRate, AdvisorError> {
        let pair = PairKey::new(from, to);

        let cached = self.store.get(pair).await;
        if let Some(entry) = cached {
            let age = self.clock.now().signed_duration_since(entry.observed_at);
            if age <= self.valid_for {
                tracing::debug!(%pair, "serving cached rate");
                return Ok(entry);
            }
        }

        // Non-blocking, try-once admission. The permit is held for the whole
        // refresh and released on every exit path when it drops.
        let Ok(_permit) = self.refresh_gate.try_acquire() else {
            return match cached {
                Some(entry) => {
                    tracing::debug!(%pair, "refresh in flight, serving stale rate");
                    Ok(entry)
                }
                None => Err(AdvisorError::Busy { pair }),
            };
        };

        self.refresh(pair).await
    }

    /// Fetches the latest and reference quotes, recomputes the signal, and
    /// stores the result. The cache is only written when both fetches
    /// succeed.
    async fn refresh(&self, pair: PairKey) -> Result<CachedRate, AdvisorError> {
        let reference_date = self.reference_date();

        // Both fetches are in flight together; the first failure cancels the
        // sibling, which aborts its underlying call.
        let (current, past) = tokio::try_join!(
            self.fetch(FetchKind::Latest, pair, None),
            self.fetch(FetchKind::Historical, pair, Some(reference_date)),
        )?;

        let entry = CachedRate {
            one_unit: current,
            should_exchange: past > current,
            observed_at: self.clock.now(),
        };
        self.store.put(pair, entry).await;
        tracing::info!(
            %pair,
            one_unit = entry.one_unit,
            should_exchange = entry.should_exchange,
            "stored refreshed rate"
        );
        Ok(entry)
    }

    /// Resolves one quote to the rate for the pair's target currency,
    /// racing the source call against the fetch timeout.
    async fn fetch(
        &self,
        kind: FetchKind,
        pair: PairKey,
        date: Option<NaiveDate>,
    ) -> Result<f64, AdvisorError> {
        let call = async {
            match date {
                Some(d) => self.source.quote_as_of(pair.from, pair.to, d).await,
                None => self.source.quote_now(pair.from, pair.to).await,
            }
        };

        let quote = tokio::time::timeout(self.fetch_timeout, call)
            .await
            .map_err(|_| AdvisorError::Timeout {
                fetch: kind,
                pair,
                timeout: self.fetch_timeout,
            })?
            .map_err(|source| AdvisorError::Fetch {
                fetch: kind,
                pair,
                source,
            })?;

        quote.rate_for(pair.to).ok_or(AdvisorError::MissingCurrency {
            fetch: kind,
            pair,
            currency: pair.to,
        })
    }

    fn reference_date(&self) -> NaiveDate {
        (self.clock.now() - TimeDelta::days(REFERENCE_WINDOW_DAYS)).date_naive()
    }
}

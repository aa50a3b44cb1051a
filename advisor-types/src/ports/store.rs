//! Rate cache port.

use async_trait::async_trait;

use crate::domain::{CachedRate, PairKey};

/// Port trait for the rate cache.
///
/// `None` from `get` means no entry has ever been stored for the pair.
/// Implementations are shared across all concurrent requests and must
/// synchronize internally.
#[async_trait]
pub trait RateStore: Send + Sync {
    async fn get(&self, pair: PairKey) -> Option<CachedRate>;

    async fn put(&self, pair: PairKey, entry: CachedRate);
}

//! In-memory rate cache.

use async_trait::async_trait;
use dashmap::DashMap;

use advisor_types::{CachedRate, PairKey, RateStore};

/// Cache store backed by a concurrent in-memory map.
///
/// Entries live for the lifetime of the process; persistence across
/// restarts is out of scope.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<PairKey, CachedRate>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateStore for InMemoryStore {
    async fn get(&self, pair: PairKey) -> Option<CachedRate> {
        self.entries.get(&pair).map(|entry| *entry)
    }

    async fn put(&self, pair: PairKey, entry: CachedRate) {
        self.entries.insert(pair, entry);
    }
}

//! Process clock port.

use chrono::{DateTime, Utc};

/// Time source injected into the orchestrator.
///
/// Exists so staleness checks and stored timestamps are deterministic under
/// test; production wiring uses the system clock adapter.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

//! System clock adapter.

use chrono::{DateTime, Utc};

use advisor_types::Clock;

/// Wall-clock time source for production wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

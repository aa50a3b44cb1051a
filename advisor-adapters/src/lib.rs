//! # Advisor Adapters
//!
//! Concrete outbound adapters for the exchange advisor service. Each module
//! implements one of the ports defined in `advisor-types`:
//!
//! - `http_source` - `RateSource` against a REST rates API (reqwest)
//! - `memory_store` - `RateStore` over a concurrent in-memory map
//! - `clock` - `Clock` reading the system time

pub mod clock;
pub mod http_source;
pub mod memory_store;

pub use clock::SystemClock;
pub use http_source::HttpRateSource;
pub use memory_store::InMemoryStore;

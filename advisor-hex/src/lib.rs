//! # Advisor Hex
//!
//! Application service layer and HTTP adapter for the exchange advisor.
//!
//! ## Architecture
//!
//! - `service/` - Rate orchestrator (cache-vs-refresh decision, single-flight
//!   refresh, dual concurrent fetch)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over its three ports (`RateSource`, `RateStore`,
//! `Clock`), allowing different adapter implementations to be injected.

pub mod inbound;
pub mod service;


pub use service::RateAdvisor;

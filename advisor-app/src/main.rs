//! # Advisor Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Construct the outbound adapters (rate source, cache store, clock)
//! - Create the rate orchestrator
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_adapters::{HttpRateSource, InMemoryStore, SystemClock};
use advisor_hex::{RateAdvisor, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,advisor_app=debug,advisor_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting advisor server on port {}", config.port);
    tracing::info!("Using rate source: {}", config.rates_url);

    let source = HttpRateSource::new(&config.rates_url);
    let store = InMemoryStore::new();

    // Create the rate orchestrator
    let service = RateAdvisor::new(
        source,
        store,
        SystemClock,
        config.valid_duration,
        config.fetch_timeout,
    );

    // Create and run the HTTP server
    let server = HttpServer::with_rate_limit(
        service,
        config.valid_currencies,
        config.rate_limit_per_minute,
    );
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}

//! HTTP Server configuration and startup.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use advisor_types::{Clock, Currency, RateSource, RateStore};

use super::handlers::{self, AppState};
use super::rate_limit::{RateLimiterState, rate_limit_middleware};
use crate::RateAdvisor;

/// HTTP Server for the Exchange Advisor API.
pub struct HttpServer<S: RateSource, C: RateStore, K: Clock> {
    state: Arc<AppState<S, C, K>>,
    rate_limiter: Arc<RateLimiterState>,
}

impl<S, C, K> HttpServer<S, C, K>
where
    S: RateSource + 'static,
    C: RateStore + 'static,
    K: Clock + 'static,
{
    /// Creates a new HTTP server with the given orchestrator.
    pub fn new(service: RateAdvisor<S, C, K>, valid_currencies: HashSet<Currency>) -> Self {
        Self {
            state: Arc::new(AppState {
                service,
                valid_currencies,
            }),
            rate_limiter: Arc::new(RateLimiterState::default()), // 100 req/min default
        }
    }

    /// Creates a new HTTP server with custom rate limiting.
    pub fn with_rate_limit(
        service: RateAdvisor<S, C, K>,
        valid_currencies: HashSet<Currency>,
        requests_per_minute: u32,
    ) -> Self {
        use std::time::Duration;
        Self {
            state: Arc::new(AppState {
                service,
                valid_currencies,
            }),
            rate_limiter: Arc::new(RateLimiterState::new(
                requests_per_minute,
                Duration::from_secs(60),
            )),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/v1/exchange", get(handlers::exchange::<S, C, K>))
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}

//! Configuration loading from environment.

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use advisor_types::Currency;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub rates_url: String,
    /// How long a cached entry is considered fresh.
    pub valid_duration: Duration,
    /// Per-fetch ceiling for upstream quote requests.
    pub fetch_timeout: Duration,
    pub valid_currencies: HashSet<Currency>,
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let rates_url = env::var("RATES_URL")
            .unwrap_or_else(|_| "https://api.exchangeratesapi.io".to_string());

        let valid_duration = Duration::from_secs(
            env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()?,
        );

        let fetch_timeout = Duration::from_secs(
            env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
        );

        let raw = env::var("VALID_CURRENCIES").unwrap_or_else(|_| "EUR,USD,GBP".to_string());
        let mut valid_currencies = HashSet::new();
        for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let currency = code
                .parse::<Currency>()
                .map_err(|e| anyhow::anyhow!("VALID_CURRENCIES: {e}"))?;
            valid_currencies.insert(currency);
        }
        if valid_currencies.len() < 2 {
            anyhow::bail!("VALID_CURRENCIES must name at least two currencies");
        }

        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()?;

        Ok(Self {
            port,
            rates_url,
            valid_duration,
            fetch_timeout,
            valid_currencies,
            rate_limit_per_minute,
        })
    }
}

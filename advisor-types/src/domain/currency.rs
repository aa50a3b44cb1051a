//! Currency codes and the ordered pair used to index the rate cache.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies the advisor can quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    INR,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
        }
    }

    pub fn all() -> &'static [Currency] {
        &[Currency::USD, Currency::EUR, Currency::GBP, Currency::INR]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "INR" => Ok(Currency::INR),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// Ordered (from, to) pair keying a cache entry.
///
/// `from != to` is enforced by the endpoint layer before the orchestrator
/// is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    pub from: Currency,
    pub to: Currency,
}

impl PairKey {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::GBP.to_string(), "GBP");
    }

    #[test]
    fn test_pair_key_display() {
        let pair = PairKey::new(Currency::EUR, Currency::GBP);
        assert_eq!(pair.to_string(), "EUR->GBP");
    }

    #[test]
    fn test_pair_key_is_ordered() {
        let a = PairKey::new(Currency::EUR, Currency::GBP);
        let b = PairKey::new(Currency::GBP, Currency::EUR);
        assert_ne!(a, b);
    }
}

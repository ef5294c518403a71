use crate::pricing::MONEY_TOLERANCE;
use rust_decimal::prelude::*;

/// Pricing configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | LOG_JSON | false | Emit JSON log lines |
/// | CURRENCY_SYMBOL | £ | Symbol used when displaying prices |
/// | SAVINGS_TOLERANCE | 0.01 | Allowed gap between a manual and a derived savings amount |
///
/// Unparseable values fall back to the default.
///
/// # Example
///
/// ```ignore
/// CURRENCY_SYMBOL=€ LOG_LEVEL=debug listing-pricing listing.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    pub currency_symbol: String,
    pub savings_tolerance: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or_else(|| "£".into()),
            savings_tolerance: lookup("SAVINGS_TOLERANCE")
                .and_then(|v| Decimal::from_str(v.trim()).ok())
                .filter(|t| !t.is_sign_negative())
                .unwrap_or(MONEY_TOLERANCE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

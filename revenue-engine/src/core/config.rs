use std::str::FromStr;

use rust_decimal::Decimal;
use shared::error::AppResult;

use crate::revenue::{DEFAULT_STORE_RATIO, DEFAULT_WELFARE_RATE, RevenuePolicy};

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | REVENUE_DEFAULT_WELFARE_RATE | 10 | Welfare rate (%) when a reservation omits it |
/// | REVENUE_DEFAULT_STORE_RATIO | 60 | Store share (%) of options/designation without an explicit split |
/// | ENVIRONMENT | development | Runtime environment |
///
/// Values that do not parse, or fall outside 0-100, are ignored with a warning.
///
/// # Example
///
/// ```ignore
/// REVENUE_DEFAULT_WELFARE_RATE=8 revenue-quote --input reservations.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_welfare_rate: Decimal,
    pub default_store_ratio: Decimal,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests, embedded callers)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_welfare_rate: percent_var(
                &lookup,
                "REVENUE_DEFAULT_WELFARE_RATE",
                DEFAULT_WELFARE_RATE,
            ),
            default_store_ratio: percent_var(
                &lookup,
                "REVENUE_DEFAULT_STORE_RATIO",
                DEFAULT_STORE_RATIO,
            ),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Override rates (command line flags); out-of-range values are rejected
    pub fn with_overrides(
        mut self,
        welfare_rate: Option<Decimal>,
        store_ratio: Option<Decimal>,
    ) -> AppResult<Self> {
        let policy = RevenuePolicy::new(
            welfare_rate.unwrap_or(self.default_welfare_rate),
            store_ratio.unwrap_or(self.default_store_ratio),
        )?;
        self.default_welfare_rate = policy.default_welfare_rate;
        self.default_store_ratio = policy.default_store_ratio;
        Ok(self)
    }

    pub fn policy(&self) -> RevenuePolicy {
        RevenuePolicy::new(self.default_welfare_rate, self.default_store_ratio)
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_welfare_rate: DEFAULT_WELFARE_RATE,
            default_store_ratio: DEFAULT_STORE_RATIO,
            environment: "development".into(),
        }
    }
}

fn percent_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Decimal) -> Decimal {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match Decimal::from_str(raw.trim()) {
        Ok(value) if value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED => value,
        _ => {
            tracing::warn!(
                key,
                value = %raw,
                %default,
                "Invalid percentage in environment, using default"
            );
            default
        }
    }
}

//! Default split policy

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};

/// Welfare rate applied when the reservation does not carry one (10%)
pub const DEFAULT_WELFARE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Store share of an option or designation fee with no explicit split (60%)
pub const DEFAULT_STORE_RATIO: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Defaults used when a reservation leaves rates or shares unspecified
///
/// Both values are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenuePolicy {
    pub default_welfare_rate: Decimal,
    pub default_store_ratio: Decimal,
}

impl RevenuePolicy {
    /// Build a policy, rejecting rates outside `[0, 100]`
    pub fn new(default_welfare_rate: Decimal, default_store_ratio: Decimal) -> AppResult<Self> {
        validate_percent("defaultWelfareRate", default_welfare_rate)?;
        validate_percent("defaultStoreRatio", default_store_ratio)?;
        Ok(Self {
            default_welfare_rate,
            default_store_ratio,
        })
    }

    pub fn with_welfare_rate(self, rate: Decimal) -> AppResult<Self> {
        Self::new(rate, self.default_store_ratio)
    }

    pub fn with_store_ratio(self, ratio: Decimal) -> AppResult<Self> {
        Self::new(self.default_welfare_rate, ratio)
    }
}

impl Default for RevenuePolicy {
    fn default() -> Self {
        Self {
            default_welfare_rate: DEFAULT_WELFARE_RATE,
            default_store_ratio: DEFAULT_STORE_RATIO,
        }
    }
}

fn validate_percent(field: &str, value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(AppError::with_message(
            ErrorCode::RevenuePolicyInvalid,
            format!("{} must be between 0 and 100, got {}", field, value),
        )
        .with_detail("field", field)
        .with_detail("value", value.to_string()));
    }
    Ok(())
}

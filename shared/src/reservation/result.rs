//! Revenue calculation result

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized store/cast breakdown of one reservation
///
/// Every amount is non-negative integer yen. Callers persist `store_revenue`,
/// `staff_revenue` and `welfare_expense` onto the reservation record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRevenueResult {
    /// Normalized course price
    pub base_price: i64,
    /// Amount charged to the customer, never negative
    pub total: i64,
    pub welfare_expense: i64,
    /// Welfare rate actually applied (percent), written as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub welfare_rate: Decimal,

    pub course_store_share: i64,
    pub course_cast_share: i64,

    /// Sum of all option prices
    pub options_total: i64,
    pub option_store_share: i64,
    pub option_cast_share: i64,

    pub designation_amount: i64,
    pub designation_store_share: i64,
    pub designation_cast_share: i64,

    // Store-side flat adjustments
    pub transportation_fee: i64,
    pub additional_fee: i64,
    pub discount_amount: i64,

    pub store_revenue: i64,
    pub staff_revenue: i64,
}

impl ReservationRevenueResult {
    /// `total - (store_revenue + staff_revenue)`
    ///
    /// Zero when the split is conserved. Negative when the welfare floor
    /// lifted store revenue above what the discounted total covers; positive
    /// never happens for normalized input.
    pub fn allocation_gap(&self) -> i64 {
        self.total - (self.store_revenue + self.staff_revenue)
    }

    /// Whether store and staff revenue add back up to the total
    pub fn is_conserved(&self) -> bool {
        self.allocation_gap() == 0
    }
}

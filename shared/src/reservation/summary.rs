//! Batch revenue totals

use super::ReservationRevenueResult;
use serde::{Deserialize, Serialize};

/// Aggregate of many reservation results (settlement / payout view)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub reservation_count: u64,
    pub total: i64,
    pub store_revenue: i64,
    pub staff_revenue: i64,
    pub welfare_expense: i64,
    pub discount_amount: i64,
}

impl RevenueSummary {
    /// Add one reservation result (saturating)
    pub fn add(&mut self, result: &ReservationRevenueResult) {
        self.reservation_count = self.reservation_count.saturating_add(1);
        self.total = self.total.saturating_add(result.total);
        self.store_revenue = self.store_revenue.saturating_add(result.store_revenue);
        self.staff_revenue = self.staff_revenue.saturating_add(result.staff_revenue);
        self.welfare_expense = self.welfare_expense.saturating_add(result.welfare_expense);
        self.discount_amount = self.discount_amount.saturating_add(result.discount_amount);
    }
}

impl<'a> Extend<&'a ReservationRevenueResult> for RevenueSummary {
    fn extend<I: IntoIterator<Item = &'a ReservationRevenueResult>>(&mut self, iter: I) {
        for result in iter {
            self.add(result);
        }
    }
}

impl<'a> FromIterator<&'a ReservationRevenueResult> for RevenueSummary {
    fn from_iter<I: IntoIterator<Item = &'a ReservationRevenueResult>>(iter: I) -> Self {
        let mut summary = Self::default();
        summary.extend(iter);
        summary
    }
}

//! Reservation revenue allocator
//!
//! Splits one reservation's charges between store and cast and computes the
//! welfare withholding.
//!
//! # Calculation Steps
//!
//! 1. welfare = round(base × rate / 100)
//! 2. course split: store defaults to welfare, cast to base − welfare
//! 3. each option: split independently (default 60% store), accumulated
//! 4. designation fee: split like an option
//! 5. transportation / additional fees go to store, discount is absorbed by store
//! 6. total = max(0, charges − discount)
//! 7. store revenue = max(store shares + fees − discount, welfare)
//! 8. staff revenue = cast shares

use shared::reservation::{ReservationRevenueInput, ReservationRevenueResult};

use super::input::{Charge, NormalizedInput};
use super::share::{ShareSplit, resolve_share, resolve_share_with_ratio};
use super::RevenuePolicy;
use crate::money::percent_of;

/// Stateless calculator bound to a [`RevenuePolicy`]
///
/// Calls never interact; one allocator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevenueAllocator {
    policy: RevenuePolicy,
}

impl RevenueAllocator {
    pub const fn new(policy: RevenuePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RevenuePolicy {
        &self.policy
    }

    /// Normalize the input and allocate it. Never fails.
    pub fn calculate(&self, input: &ReservationRevenueInput) -> ReservationRevenueResult {
        let normalized = NormalizedInput::from_input(input, &self.policy);
        self.allocate(&normalized)
    }

    /// Allocate an already normalized reservation
    pub fn allocate(&self, input: &NormalizedInput) -> ReservationRevenueResult {
        let base_price = input.base_price();
        let welfare_expense = percent_of(base_price, input.welfare_rate).min(base_price);

        let course = resolve_share(
            base_price,
            input.course.store_share,
            input.course.cast_share,
            welfare_expense,
        );

        let mut options_total: i64 = 0;
        let mut options = ShareSplit::default();
        for option in &input.options {
            options_total = options_total.saturating_add(option.price);
            options += self.split_charge(option);
        }

        let designation_amount = input.designation.map_or(0, |d| d.price);
        let designation = input
            .designation
            .as_ref()
            .map(|d| self.split_charge(d))
            .unwrap_or_default();

        let charges = base_price
            .saturating_add(options_total)
            .saturating_add(designation_amount)
            .saturating_add(input.transportation_fee)
            .saturating_add(input.additional_fee);
        let total = charges.saturating_sub(input.discount_amount).max(0);

        let store_before_floor = course
            .store
            .saturating_add(options.store)
            .saturating_add(designation.store)
            .saturating_add(input.transportation_fee)
            .saturating_add(input.additional_fee)
            .saturating_sub(input.discount_amount);
        let store_revenue = store_before_floor.max(welfare_expense);
        if store_revenue != store_before_floor {
            tracing::debug!(
                store_before_floor,
                welfare_expense,
                "Store revenue floored at welfare expense"
            );
        }

        let staff_revenue = course
            .cast
            .saturating_add(options.cast)
            .saturating_add(designation.cast)
            .max(0);

        ReservationRevenueResult {
            base_price,
            total,
            welfare_expense,
            welfare_rate: input.welfare_rate,
            course_store_share: course.store,
            course_cast_share: course.cast,
            options_total,
            option_store_share: options.store,
            option_cast_share: options.cast,
            designation_amount,
            designation_store_share: designation.store,
            designation_cast_share: designation.cast,
            transportation_fee: input.transportation_fee,
            additional_fee: input.additional_fee,
            discount_amount: input.discount_amount,
            store_revenue,
            staff_revenue,
        }
    }

    fn split_charge(&self, charge: &Charge) -> ShareSplit {
        resolve_share_with_ratio(
            charge.price,
            charge.store_share,
            charge.cast_share,
            self.policy.default_store_ratio,
        )
    }
}

/// Calculate a reservation's revenue split with the default policy
/// (10% welfare, 60% store share on options and designation)
pub fn calculate_reservation_revenue(input: &ReservationRevenueInput) -> ReservationRevenueResult {
    RevenueAllocator::default().calculate(input)
}

//! Normalized revenue input
//!
//! [`ReservationRevenueInput`] carries caller values as received. This is the
//! same reservation after every field has passed through [`crate::money`]:
//! whole yen, no negatives, rate clamped. The allocator only ever sees this.

use rust_decimal::Decimal;
use shared::reservation::{DesignationShare, OptionShare, ReservationRevenueInput};

use super::RevenuePolicy;
use crate::money::{normalize_amount, normalize_optional, normalize_rate, normalize_share};

/// A fixed-price charge with optionally specified shares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Charge {
    pub price: i64,
    pub store_share: Option<i64>,
    pub cast_share: Option<i64>,
}

impl From<&OptionShare> for Charge {
    fn from(option: &OptionShare) -> Self {
        Self {
            price: normalize_amount(&option.price),
            store_share: normalize_share(option.store_share.as_ref()),
            cast_share: normalize_share(option.cast_share.as_ref()),
        }
    }
}

impl From<&DesignationShare> for Charge {
    fn from(designation: &DesignationShare) -> Self {
        Self {
            price: normalize_amount(&designation.amount),
            store_share: normalize_share(designation.store_share.as_ref()),
            cast_share: normalize_share(designation.cast_share.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// Course charge; `price` is the base price
    pub course: Charge,
    pub options: Vec<Charge>,
    pub designation: Option<Charge>,
    pub transportation_fee: i64,
    pub additional_fee: i64,
    pub discount_amount: i64,
    pub welfare_rate: Decimal,
}

impl NormalizedInput {
    pub fn from_input(input: &ReservationRevenueInput, policy: &RevenuePolicy) -> Self {
        Self {
            course: Charge {
                price: normalize_amount(&input.base_price),
                store_share: normalize_share(input.course_store_share.as_ref()),
                cast_share: normalize_share(input.course_cast_share.as_ref()),
            },
            options: input.options.iter().map(Charge::from).collect(),
            designation: input.designation.as_ref().map(Charge::from),
            transportation_fee: normalize_optional(input.transportation_fee.as_ref()),
            additional_fee: normalize_optional(input.additional_fee.as_ref()),
            discount_amount: normalize_optional(input.discount_amount.as_ref()),
            welfare_rate: normalize_rate(input.welfare_rate.as_ref(), policy.default_welfare_rate),
        }
    }

    pub fn base_price(&self) -> i64 {
        self.course.price
    }
}

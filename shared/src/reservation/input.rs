//! Revenue calculation input

use super::Amount;
use serde::{Deserialize, Serialize};

/// A selected add-on with its own price and optional store/cast split
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionShare {
    #[serde(default)]
    pub price: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_share: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_share: Option<Amount>,
}

impl OptionShare {
    pub fn new(price: impl Into<Amount>) -> Self {
        Self {
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_store_share(mut self, share: impl Into<Amount>) -> Self {
        self.store_share = Some(share.into());
        self
    }

    pub fn with_cast_share(mut self, share: impl Into<Amount>) -> Self {
        self.cast_share = Some(share.into());
        self
    }
}

/// Designation (named-selection) fee with optional store/cast split
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignationShare {
    #[serde(default)]
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_share: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_share: Option<Amount>,
}

impl DesignationShare {
    pub fn new(amount: impl Into<Amount>) -> Self {
        Self {
            amount: amount.into(),
            ..Default::default()
        }
    }

    pub fn with_store_share(mut self, share: impl Into<Amount>) -> Self {
        self.store_share = Some(share.into());
        self
    }

    pub fn with_cast_share(mut self, share: impl Into<Amount>) -> Self {
        self.cast_share = Some(share.into());
        self
    }
}

/// Billable components of one reservation
///
/// Built by the caller from persisted course/option/designation records or
/// from a half-filled booking form. Every field may be missing or malformed;
/// the engine degrades those to zero (or the default welfare rate).
///
/// ```json
/// {
///   "basePrice": 14000,
///   "options": [{ "price": 2000, "storeShare": 1200, "castShare": 800 }],
///   "designation": { "amount": 2000 },
///   "transportationFee": "1000",
///   "discountAmount": 3000,
///   "welfareRate": 10
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRevenueInput {
    /// Course price before any split
    #[serde(default)]
    pub base_price: Amount,
    /// Explicit store share of the course price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_store_share: Option<Amount>,
    /// Explicit cast share of the course price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_cast_share: Option<Amount>,
    /// `null` reads as no options
    #[serde(default, deserialize_with = "deserialize_options")]
    pub options: Vec<OptionShare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<DesignationShare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_fee: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_fee: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Amount>,
    /// Percentage (0-100) of the base price withheld as welfare expense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welfare_rate: Option<Amount>,
}

impl ReservationRevenueInput {
    pub fn new(base_price: impl Into<Amount>) -> Self {
        Self {
            base_price: base_price.into(),
            ..Default::default()
        }
    }

    pub fn with_option(mut self, option: OptionShare) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_designation(mut self, designation: DesignationShare) -> Self {
        self.designation = Some(designation);
        self
    }

    pub fn with_course_shares(
        mut self,
        store_share: Option<Amount>,
        cast_share: Option<Amount>,
    ) -> Self {
        self.course_store_share = store_share;
        self.course_cast_share = cast_share;
        self
    }

    pub fn with_transportation_fee(mut self, fee: impl Into<Amount>) -> Self {
        self.transportation_fee = Some(fee.into());
        self
    }

    pub fn with_additional_fee(mut self, fee: impl Into<Amount>) -> Self {
        self.additional_fee = Some(fee.into());
        self
    }

    pub fn with_discount(mut self, discount: impl Into<Amount>) -> Self {
        self.discount_amount = Some(discount.into());
        self
    }

    pub fn with_welfare_rate(mut self, rate: impl Into<Amount>) -> Self {
        self.welfare_rate = Some(rate.into());
        self
    }
}

fn deserialize_options<'de, D>(deserializer: D) -> Result<Vec<OptionShare>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<Vec<OptionShare>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

//! Money normalization utilities using rust_decimal for precision
//!
//! This is the sanitization boundary between loosely typed caller input
//! ([`Amount`]) and the strictly typed allocator. Amounts become whole,
//! non-negative yen; rates become percentages in `[0, 100]`.
//! Nothing here fails: unusable input degrades to zero (or a default rate).

use std::str::FromStr;

use rust_decimal::prelude::*;
use shared::reservation::Amount;

/// Largest amount accepted for a single field (¥1,000,000,000,000).
///
/// Larger inputs saturate here so that summing fields can never overflow.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

const MAX_AMOUNT_F64: f64 = MAX_AMOUNT as f64;

/// Whole yen, half away from zero
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Parse an [`Amount`] into a Decimal, or `None` when it is not a usable number
///
/// - finite JSON numbers are taken as-is
/// - strings are trimmed; empty means zero; plain and scientific notation accepted
/// - NaN, infinities, booleans, objects, unparsable text yield `None`
pub fn parse_amount(value: &Amount) -> Option<Decimal> {
    match value {
        Amount::Number(n) => finite_to_decimal(*n),
        Amount::Text(text) => parse_text(text),
        Amount::Other(_) => None,
    }
}

fn parse_text(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(trimmed)
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
        .or_else(|| trimmed.parse::<f64>().ok().and_then(finite_to_decimal))
}

fn finite_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value.clamp(-MAX_AMOUNT_F64, MAX_AMOUNT_F64))
}

/// Convert an [`Amount`] to Decimal, treating unusable values as zero
///
/// Non-finite numbers are logged: they can only come from in-process
/// callers, never from JSON, and usually mean an upstream calculation broke.
#[inline]
pub fn to_decimal(value: &Amount) -> Decimal {
    parse_amount(value).unwrap_or_else(|| {
        if let Amount::Number(n) = value {
            tracing::warn!(value = ?n, "Non-finite amount in revenue input, defaulting to zero");
        } else {
            tracing::debug!(
                value = ?value,
                "Unparsable amount in revenue input, defaulting to zero"
            );
        }
        Decimal::ZERO
    })
}

/// Round a Decimal to whole yen and clamp into `[0, MAX_AMOUNT]`
#[inline]
pub fn to_yen(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, ROUNDING)
        .clamp(Decimal::ZERO, Decimal::from(MAX_AMOUNT))
        .to_i64()
        .unwrap_or_default()
}

/// Normalize a required amount field to non-negative whole yen
pub fn normalize_amount(value: &Amount) -> i64 {
    to_yen(to_decimal(value))
}

/// Normalize an optional amount field; missing means zero
pub fn normalize_optional(value: Option<&Amount>) -> i64 {
    value.map(normalize_amount).unwrap_or(0)
}

/// Normalize an optional share, keeping "not given" distinct from zero
pub fn normalize_share(value: Option<&Amount>) -> Option<i64> {
    value.map(normalize_amount)
}

/// Clamp a percentage into `[0, 100]`
#[inline]
pub fn clamp_percent(rate: Decimal) -> Decimal {
    rate.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Normalize a percentage field
///
/// Missing or unusable values fall back to `default`; everything is clamped
/// into `[0, 100]`. Fractional rates (e.g. 7.5) are kept.
pub fn normalize_rate(value: Option<&Amount>, default: Decimal) -> Decimal {
    let rate = value.and_then(parse_amount).unwrap_or(default);
    clamp_percent(rate)
}

/// `round(amount × rate / 100)` in whole yen, never negative
pub fn percent_of(amount: i64, rate: Decimal) -> i64 {
    to_yen(Decimal::from(amount) * rate / Decimal::ONE_HUNDRED)
}

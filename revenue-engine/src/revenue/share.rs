//! Store/cast share resolution
//!
//! One rule splits every fixed-price charge (course, each option, the
//! designation fee). Whatever the caller supplies, the resolved pair sums to
//! the charge price exactly.

use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;

use crate::money::percent_of;

/// Store and cast portions of one charge, in whole yen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareSplit {
    pub store: i64,
    pub cast: i64,
}

impl ShareSplit {
    pub fn total(&self) -> i64 {
        self.store + self.cast
    }
}

impl Add for ShareSplit {
    type Output = ShareSplit;

    fn add(self, rhs: ShareSplit) -> ShareSplit {
        ShareSplit {
            store: self.store.saturating_add(rhs.store),
            cast: self.cast.saturating_add(rhs.cast),
        }
    }
}

impl AddAssign for ShareSplit {
    fn add_assign(&mut self, rhs: ShareSplit) {
        *self = *self + rhs;
    }
}

/// Resolve the store/cast split of a charge
///
/// - neither share given: store takes `default_store`, cast the remainder
/// - one share given: it is clamped into `[0, price]`, the other is `price - given`
/// - both given: each is clamped; if they no longer sum to `price`, the store
///   share wins and cast becomes `price - store`
///
/// `default_store` is clamped too, so the result always satisfies
/// `store + cast == price` with both sides in `[0, price]`.
pub fn resolve_share(
    price: i64,
    store_share: Option<i64>,
    cast_share: Option<i64>,
    default_store: i64,
) -> ShareSplit {
    let price = price.max(0);
    let clamp = |value: i64| value.clamp(0, price);

    match (store_share, cast_share) {
        (None, None) => {
            let store = clamp(default_store);
            ShareSplit {
                store,
                cast: price - store,
            }
        }
        (Some(store), None) => {
            let store = clamp(store);
            ShareSplit {
                store,
                cast: price - store,
            }
        }
        (None, Some(cast)) => {
            let cast = clamp(cast);
            ShareSplit {
                store: price - cast,
                cast,
            }
        }
        (Some(store), Some(cast)) => {
            let store = clamp(store);
            let cast = clamp(cast);
            if store + cast == price {
                ShareSplit { store, cast }
            } else {
                ShareSplit {
                    store,
                    cast: price - store,
                }
            }
        }
    }
}

/// Resolve a split whose default store portion is `store_ratio` percent of the price
pub fn resolve_share_with_ratio(
    price: i64,
    store_share: Option<i64>,
    cast_share: Option<i64>,
    store_ratio: Decimal,
) -> ShareSplit {
    resolve_share(price, store_share, cast_share, percent_of(price, store_ratio))
}

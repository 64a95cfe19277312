//! Reservation revenue DTOs
//!
//! Types exchanged between booking callers (reservation create/update
//! handlers, quote previews) and the revenue engine. All monetary values
//! are integer yen.

mod amount;
mod input;
mod result;
mod summary;

pub use amount::Amount;
pub use input::{DesignationShare, OptionShare, ReservationRevenueInput};
pub use result::ReservationRevenueResult;
pub use summary::RevenueSummary;

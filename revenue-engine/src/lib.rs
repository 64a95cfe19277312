//! Revenue Engine - reservation revenue allocation
//!
//! Splits a reservation's charges (course, options, designation fee, flat
//! fees, discount) between store and cast, and computes the welfare
//! withholding that the store retains.
//!
//! # Module structure
//!
//! ```text
//! revenue-engine/src/
//! ├── core/          # Configuration
//! ├── money/         # Input normalization (Decimal, whole yen)
//! ├── revenue/       # Share resolution and the allocator
//! ├── quote/         # JSON batch quoting
//! └── utils/         # Logging
//! ```
//!
//! # Example
//!
//! ```
//! use revenue_engine::calculate_reservation_revenue;
//! use shared::reservation::{OptionShare, ReservationRevenueInput};
//!
//! let input = ReservationRevenueInput::new(10000).with_option(OptionShare::new(2000));
//! let result = calculate_reservation_revenue(&input);
//!
//! assert_eq!(result.welfare_expense, 1000);
//! assert_eq!(result.store_revenue, 1000 + 1200);
//! assert_eq!(result.staff_revenue, 9000 + 800);
//! ```

pub mod core;
pub mod money;
pub mod quote;
pub mod revenue;
pub mod utils;

// Re-export public types
pub use crate::core::Config;
pub use quote::QuoteReport;
pub use revenue::{
    DEFAULT_STORE_RATIO, DEFAULT_WELFARE_RATE, RevenueAllocator, RevenuePolicy,
    calculate_reservation_revenue,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

//! Shared types for the salon revenue workspace
//!
//! Reservation DTOs exchanged between booking callers and the revenue
//! engine, and the unified error system.

pub mod error;
pub mod reservation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use reservation::{
    Amount, DesignationShare, OptionShare, ReservationRevenueInput, ReservationRevenueResult,
    RevenueSummary,
};

//! Reservation Revenue Module
//!
//! Store/cast revenue split and welfare withholding for a single
//! reservation. Pure computation: no I/O, no shared state.

mod allocator;
mod input;
mod policy;
mod share;

pub use allocator::*;
pub use input::*;
pub use policy::*;
pub use share::*;

#[cfg(test)]
mod tests;

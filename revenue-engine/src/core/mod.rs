//! Core module - engine configuration
//!
//! - [`Config`] - environment-driven defaults for the revenue policy

pub mod config;

pub use config::Config;

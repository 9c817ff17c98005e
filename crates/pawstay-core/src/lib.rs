//! Shared building blocks for the pawstay booking service.
//!
//! Nothing in here talks to the database; the crate holds configuration,
//! the core error type, booking constants and calendar helpers.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;

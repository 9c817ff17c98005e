//! Reservations and their per-day capacity.
//!
//! ## Module Organization
//!
//! - `allocator`: Claims one day slot per day of a reservation, all or nothing
//! - `availability`: Per-day taken/free counts over a window
//! - `ledger`: Reservation lifecycle (create, read, list, update, cancel)
//! - `validation`: Date-range, dog-name and frozen-field checks

pub mod allocator;
pub mod availability;
pub mod ledger;
pub mod validation;

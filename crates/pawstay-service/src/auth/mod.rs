//! Request authentication.
//!
//! ## Module Organization
//!
//! - `authenticate`: Resolves the reservation owner (single user, proxy header)
//! - `depot`: Depot keys and helpers for handing the owner to handlers

pub mod authenticate;
pub mod depot;

pub use depot::{DepotUser, depot_keys, get_user_from_depot, is_authenticated};

//! Postgres persistence for rooms, reservations and day slots.

pub mod db;
pub mod error;
pub mod model;

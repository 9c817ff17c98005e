//! Booking domain services: room registry, reservation ledger, day-slot
//! allocator, availability query and the room seeder.

pub mod auth;
pub mod booking;
pub mod error;
pub mod registry;
pub mod seeder;

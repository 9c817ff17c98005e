pub mod day_slot;
pub mod reservation;
pub mod room;
pub mod user;

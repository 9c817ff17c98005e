use chrono::NaiveDate;
use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

/// A booking of one room over an inclusive range of days.
///
/// `room_id`, `start_date` and `end_date` are frozen once the row exists;
/// only [`ReservationChangeset`] fields may be written afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = schema::reservation)]
#[diesel(check_for_backend(Pg))]
pub struct Reservation {
    pub id: i64,
    pub owner_id: i64,
    pub room_id: i64,
    pub dog_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::reservation)]
pub struct NewReservation<'a> {
    pub owner_id: i64,
    pub room_id: i64,
    pub dog_name: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: &'a str,
}

/// The mutable part of a reservation.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::reservation)]
pub struct ReservationChangeset<'a> {
    pub dog_name: Option<&'a str>,
    pub notes: Option<&'a str>,
}

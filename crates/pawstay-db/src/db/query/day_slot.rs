//! Day slot queries.
//!
//! The `day_slot_room_day_slot_key` unique constraint on
//! `(room_id, day, slot_index)` is what prevents overbooking; inserts here
//! surface a violation of it as a plain diesel error for the caller to classify
//! with [`is_slot_conflict`].

use chrono::NaiveDate;
use diesel::dsl::count;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::day_slot;
use crate::model::day_slot::{DaySlot, NewDaySlot};

/// Name of the unique constraint guarding `(room_id, day, slot_index)`.
pub const SLOT_UNIQUE_CONSTRAINT: &str = "day_slot_room_day_slot_key";

/// ## Summary
/// Returns true if the error is a violation of the day-slot uniqueness constraint.
#[must_use]
pub fn is_slot_conflict(err: &DieselError) -> bool {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => info
            .constraint_name()
            .is_none_or(|name| name == SLOT_UNIQUE_CONSTRAINT),
        _ => false,
    }
}

/// ## Summary
/// Inserts one day slot.
///
/// ## Errors
/// Returns a unique-violation error if the triple is already taken, or any other database error.
pub async fn insert_slot(conn: &mut DbConnection<'_>, slot: &NewDaySlot) -> QueryResult<DaySlot> {
    diesel::insert_into(day_slot::table)
        .values(slot)
        .returning(DaySlot::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Counts occupied slots per day for a room over the inclusive range `[from, to]`.
///
/// Days without any slot are absent from the result.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count_by_day(
    conn: &mut DbConnection<'_>,
    room_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> QueryResult<Vec<(NaiveDate, i64)>> {
    day_slot::table
        .filter(day_slot::room_id.eq(room_id))
        .filter(day_slot::day.ge(from))
        .filter(day_slot::day.le(to))
        .group_by(day_slot::day)
        .select((day_slot::day, count(day_slot::id)))
        .order(day_slot::day.asc())
        .load(conn)
        .await
}

/// ## Summary
/// Lists the slots held by a reservation, ordered by day.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn by_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: i64,
) -> QueryResult<Vec<DaySlot>> {
    day_slot::table
        .filter(day_slot::reservation_id.eq(reservation_id))
        .order((day_slot::day.asc(), day_slot::slot_index.asc()))
        .select(DaySlot::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Lists every slot of a room on one day, ordered by slot index.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn by_room_and_day(
    conn: &mut DbConnection<'_>,
    room_id: i64,
    day: NaiveDate,
) -> QueryResult<Vec<DaySlot>> {
    day_slot::table
        .filter(day_slot::room_id.eq(room_id))
        .filter(day_slot::day.eq(day))
        .order(day_slot::slot_index.asc())
        .select(DaySlot::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Deletes every slot held by a reservation; returns how many were removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_by_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: i64,
) -> QueryResult<usize> {
    diesel::delete(day_slot::table.filter(day_slot::reservation_id.eq(reservation_id)))
        .execute(conn)
        .await
}

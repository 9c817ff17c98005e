//! Reservation ledger queries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{reservation, room};
use crate::model::reservation::{NewReservation, Reservation, ReservationChangeset};
use crate::model::room::Room;

/// ## Summary
/// Inserts a reservation row; `created_at` is stamped by the database.
///
/// ## Errors
/// Returns a database error if the insert violates a constraint or fails.
pub async fn create_reservation(
    conn: &mut DbConnection<'_>,
    new_reservation: &NewReservation<'_>,
) -> QueryResult<Reservation> {
    diesel::insert_into(reservation::table)
        .values(new_reservation)
        .returning(Reservation::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Fetches a reservation by id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: i64,
) -> QueryResult<Option<Reservation>> {
    reservation::table
        .filter(reservation::id.eq(reservation_id))
        .select(Reservation::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Fetches a reservation together with its room.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_with_room(
    conn: &mut DbConnection<'_>,
    reservation_id: i64,
) -> QueryResult<Option<(Reservation, Room)>> {
    reservation::table
        .inner_join(room::table)
        .filter(reservation::id.eq(reservation_id))
        .select((Reservation::as_select(), Room::as_select()))
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Counts the reservations held by an owner.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count_by_owner(conn: &mut DbConnection<'_>, owner_id: i64) -> QueryResult<i64> {
    reservation::table
        .filter(reservation::owner_id.eq(owner_id))
        .count()
        .get_result(conn)
        .await
}

/// ## Summary
/// Loads one page of an owner's reservations, newest stay first
/// (`start_date` descending, then `created_at` descending).
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_by_owner(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    offset: i64,
    limit: i64,
) -> QueryResult<Vec<(Reservation, Room)>> {
    reservation::table
        .inner_join(room::table)
        .filter(reservation::owner_id.eq(owner_id))
        .order((
            reservation::start_date.desc(),
            reservation::created_at.desc(),
            reservation::id.desc(),
        ))
        .offset(offset)
        .limit(limit)
        .select((Reservation::as_select(), Room::as_select()))
        .load(conn)
        .await
}

/// ## Summary
/// Writes the mutable fields of a reservation and returns the stored row.
///
/// ## Errors
/// Returns `NotFound` if the row does not exist, or a database error.
pub async fn update_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: i64,
    changes: &ReservationChangeset<'_>,
) -> QueryResult<Reservation> {
    if changes.dog_name.is_none() && changes.notes.is_none() {
        return reservation::table
            .filter(reservation::id.eq(reservation_id))
            .select(Reservation::as_select())
            .first(conn)
            .await;
    }
    diesel::update(reservation::table.filter(reservation::id.eq(reservation_id)))
        .set(changes)
        .returning(Reservation::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Deletes a reservation row; returns the number of rows removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: i64,
) -> QueryResult<usize> {
    diesel::delete(reservation::table.filter(reservation::id.eq(reservation_id)))
        .execute(conn)
        .await
}

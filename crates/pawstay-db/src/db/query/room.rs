//! Room registry queries.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::enums::RoomType;
use crate::db::schema::room;
use crate::model::room::{NewRoom, Room, RoomChangeset};

/// ## Summary
/// Base query over rooms whose type is in the known set.
///
/// Rows with any other `room_type` cannot be deserialised and are never bookable.
#[must_use]
pub fn known_rooms() -> room::BoxedQuery<'static, Pg> {
    room::table
        .filter(room::room_type.eq_any(RoomType::ALL))
        .into_boxed()
}

/// ## Summary
/// Lists every known room ordered by type, then name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_rooms(conn: &mut DbConnection<'_>) -> QueryResult<Vec<Room>> {
    known_rooms()
        .order((room::room_type.asc(), room::name.asc(), room::id.asc()))
        .select(Room::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Fetches a single known room by id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_room(conn: &mut DbConnection<'_>, room_id: i64) -> QueryResult<Option<Room>> {
    known_rooms()
        .filter(room::id.eq(room_id))
        .select(Room::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Returns the room of the given type with the lowest daily price; ties go to
/// the alphabetically first name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn cheapest_by_type(
    conn: &mut DbConnection<'_>,
    room_type: RoomType,
) -> QueryResult<Option<Room>> {
    room::table
        .filter(room::room_type.eq(room_type))
        .order((room::price_per_day.asc(), room::name.asc(), room::id.asc()))
        .select(Room::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists the rooms of one type in insertion order (ascending id).
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn by_type_oldest_first(
    conn: &mut DbConnection<'_>,
    room_type: RoomType,
) -> QueryResult<Vec<Room>> {
    room::table
        .filter(room::room_type.eq(room_type))
        .order(room::id.asc())
        .select(Room::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Inserts a room and returns the stored row.
///
/// ## Errors
/// Returns a database error if the insert violates a constraint or fails.
pub async fn create_room(conn: &mut DbConnection<'_>, new_room: &NewRoom<'_>) -> QueryResult<Room> {
    diesel::insert_into(room::table)
        .values(new_room)
        .returning(Room::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Applies a partial update to a room; returns the number of rows touched.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_room(
    conn: &mut DbConnection<'_>,
    room_id: i64,
    changes: &RoomChangeset<'_>,
) -> QueryResult<usize> {
    if changes.is_empty() {
        return Ok(0);
    }
    diesel::update(room::table.filter(room::id.eq(room_id)))
        .set(changes)
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes the rooms with the given ids.
///
/// ## Errors
/// Fails with a foreign-key violation if any of them is still referenced by a reservation.
pub async fn delete_rooms(conn: &mut DbConnection<'_>, room_ids: &[i64]) -> QueryResult<usize> {
    if room_ids.is_empty() {
        return Ok(0);
    }
    diesel::delete(room::table.filter(room::id.eq_any(room_ids)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes every room whose type is outside the known set.
///
/// ## Errors
/// Fails with a foreign-key violation if any of them is still referenced by a reservation.
pub async fn delete_unknown_types(conn: &mut DbConnection<'_>) -> QueryResult<usize> {
    diesel::delete(room::table.filter(room::room_type.ne_all(RoomType::ALL)))
        .execute(conn)
        .await
}

//! Resource registry: read access to rooms.

use serde::Serialize;

use pawstay_db::db::connection::DbConnection;
use pawstay_db::db::enums::RoomType;
use pawstay_db::db::query::room;
use pawstay_db::model::room::Room;

use crate::error::{ServiceError, ServiceResult};

/// The cheapest room of one type, if any exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomOffer {
    pub room_type: RoomType,
    pub room: Option<Room>,
}

/// ## Summary
/// Lists every bookable room ordered by type, then name.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_rooms(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<Room>> {
    Ok(room::list_rooms(conn).await?)
}

/// ## Summary
/// Fetches one room.
///
/// ## Errors
/// Returns `NotFound` if no bookable room has this id, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn get_room(conn: &mut DbConnection<'_>, room_id: i64) -> ServiceResult<Room> {
    room::get_room(conn, room_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("room {room_id}")))
}

/// ## Summary
/// Returns the room of a type with the lowest daily price; ties go to the
/// first name alphabetically.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn cheapest_by_type(
    conn: &mut DbConnection<'_>,
    room_type: RoomType,
) -> ServiceResult<Option<Room>> {
    Ok(room::cheapest_by_type(conn, room_type).await?)
}

/// ## Summary
/// Builds the storefront offer: the cheapest room of every type, in type order.
///
/// ## Errors
/// Returns a database error if a query fails.
#[tracing::instrument(skip(conn))]
pub async fn offer(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<RoomOffer>> {
    let mut offers = Vec::with_capacity(RoomType::ALL.len());
    for room_type in RoomType::ALL {
        let room = cheapest_by_type(conn, room_type).await?;
        offers.push(RoomOffer { room_type, room });
    }
    Ok(offers)
}

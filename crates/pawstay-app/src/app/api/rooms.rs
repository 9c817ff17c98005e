//! Read-only room registry endpoints.

use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use pawstay_core::constants::ROOMS_ROUTE_COMPONENT;
use pawstay_db::model::room::Room;
use pawstay_service::registry::{self, RoomOffer};

use crate::db_handler::get_db_from_depot;
use crate::error::{AppError, AppResult, render_error};

async fn load_rooms(depot: &Depot) -> AppResult<Vec<Room>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(registry::list_rooms(&mut conn).await?)
}

async fn load_offer(depot: &Depot) -> AppResult<Vec<RoomOffer>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(registry::offer(&mut conn).await?)
}

async fn load_room(req: &Request, depot: &Depot) -> AppResult<Room> {
    let room_id = req
        .param::<i64>("id")
        .ok_or_else(|| AppError::BadRequest("room id must be an integer".to_string()))?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(registry::get_room(&mut conn, room_id).await?)
}

/// ## Summary
/// GET /rooms - every bookable room, ordered by type then name.
#[handler]
async fn list_rooms(depot: &Depot, res: &mut Response) {
    match load_rooms(depot).await {
        Ok(rooms) => res.render(Json(rooms)),
        Err(err) => render_error(res, &err),
    }
}

/// ## Summary
/// GET /rooms/offer - the cheapest room of each type.
#[handler]
async fn offer(depot: &Depot, res: &mut Response) {
    match load_offer(depot).await {
        Ok(offers) => res.render(Json(offers)),
        Err(err) => render_error(res, &err),
    }
}

/// ## Summary
/// GET /rooms/{id} - one room.
///
/// ## Errors
/// 400 for a non-numeric id, 404 for an unknown room.
#[handler]
async fn get_room(req: &mut Request, depot: &Depot, res: &mut Response) {
    match load_room(req, depot).await {
        Ok(room) => res.render(Json(room)),
        Err(err) => render_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ROOMS_ROUTE_COMPONENT)
        .get(list_rooms)
        .push(Router::with_path("offer").get(offer))
        .push(Router::with_path("{id}").get(get_room))
}

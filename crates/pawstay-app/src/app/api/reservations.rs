//! Reservation endpoints. Every route acts on the authenticated owner's
//! reservations only.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use pawstay_core::constants::RESERVATIONS_ROUTE_COMPONENT;
use pawstay_service::auth::get_user_from_depot;
use pawstay_service::booking::ledger::{
    self, NewReservationRequest, Page, ReservationSummary, ReservationUpdate,
};

use crate::config::{get_config_from_depot, today_from_depot};
use crate::db_handler::get_db_from_depot;
use crate::error::{AppError, AppResult, render_error};

fn reservation_id(req: &Request) -> AppResult<i64> {
    req.param::<i64>("id")
        .ok_or_else(|| AppError::BadRequest("reservation id must be an integer".to_string()))
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<ReservationSummary> {
    let owner_id = get_user_from_depot(depot)?.id;
    let request: NewReservationRequest = req
        .parse_json()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid reservation body: {e}")))?;
    let today = today_from_depot(depot)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(ledger::create_reservation(&mut conn, owner_id, &request, today).await?)
}

async fn list(req: &Request, depot: &Depot) -> AppResult<Page<ReservationSummary>> {
    let owner_id = get_user_from_depot(depot)?.id;
    let settings = get_config_from_depot(depot)?;
    let page = req.query::<i64>("page").unwrap_or(1);
    let page_size = req
        .query::<i64>("page_size")
        .unwrap_or(settings.booking.page_size);

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(ledger::list_reservations(&mut conn, owner_id, page, page_size).await?)
}

async fn show(req: &Request, depot: &Depot) -> AppResult<ReservationSummary> {
    let owner_id = get_user_from_depot(depot)?.id;
    let id = reservation_id(req)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(ledger::get_reservation(&mut conn, owner_id, id).await?)
}

async fn update(req: &mut Request, depot: &Depot) -> AppResult<ReservationSummary> {
    let owner_id = get_user_from_depot(depot)?.id;
    let id = reservation_id(req)?;
    let update: ReservationUpdate = req
        .parse_json()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid reservation update: {e}")))?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(ledger::update_reservation(&mut conn, owner_id, id, &update).await?)
}

async fn cancel(req: &Request, depot: &Depot) -> AppResult<usize> {
    let owner_id = get_user_from_depot(depot)?.id;
    let id = reservation_id(req)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(ledger::cancel_reservation(&mut conn, owner_id, id).await?)
}

/// ## Summary
/// POST /reservations - books a room for a date range.
///
/// ## Errors
/// 400 for an invalid body or date range, 401 without an owner, 404 for an
/// unknown room, 409 when some day has no free place.
#[handler]
#[tracing::instrument(skip_all)]
async fn create_reservation(req: &mut Request, depot: &Depot, res: &mut Response) {
    match create(req, depot).await {
        Ok(summary) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(summary));
        }
        Err(err) => render_error(res, &err),
    }
}

/// ## Summary
/// GET /reservations?page=&page_size= - the owner's reservations, latest stay first.
#[handler]
async fn list_reservations(req: &mut Request, depot: &Depot, res: &mut Response) {
    match list(req, depot).await {
        Ok(page) => res.render(Json(page)),
        Err(err) => render_error(res, &err),
    }
}

/// ## Summary
/// GET /reservations/{id}
#[handler]
async fn get_reservation(req: &mut Request, depot: &Depot, res: &mut Response) {
    match show(req, depot).await {
        Ok(summary) => res.render(Json(summary)),
        Err(err) => render_error(res, &err),
    }
}

/// ## Summary
/// PATCH /reservations/{id} - edits dog name and notes.
///
/// ## Errors
/// 400 if the body tries to change the room or dates.
#[handler]
#[tracing::instrument(skip_all)]
async fn update_reservation(req: &mut Request, depot: &Depot, res: &mut Response) {
    match update(req, depot).await {
        Ok(summary) => res.render(Json(summary)),
        Err(err) => render_error(res, &err),
    }
}

/// ## Summary
/// DELETE /reservations/{id} - cancels and frees every day of the stay.
#[handler]
#[tracing::instrument(skip_all)]
async fn cancel_reservation(req: &mut Request, depot: &Depot, res: &mut Response) {
    match cancel(req, depot).await {
        Ok(released) => {
            tracing::debug!(released, "Reservation slots released");
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => render_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RESERVATIONS_ROUTE_COMPONENT)
        .get(list_reservations)
        .post(create_reservation)
        .push(
            Router::with_path("{id}")
                .get(get_reservation)
                .patch(update_reservation)
                .delete(cancel_reservation),
        )
}

//! `GET /availability?room=<id>&start=YYYY-MM-DD&end=YYYY-MM-DD`

use chrono::NaiveDate;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use pawstay_core::constants::AVAILABILITY_ROUTE_COMPONENT;
use pawstay_service::booking::availability::{AvailabilityReport, availability, resolve_window};

use crate::config::today_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::{AppError, AppResult, render_error};

/// Query parameters after parsing, before window defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AvailabilityParams {
    room: i64,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

fn parse_date(name: &str, raw: Option<String>) -> AppResult<Option<NaiveDate>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_err| AppError::BadRequest(format!("{name} must be a YYYY-MM-DD date"))),
    }
}

fn parse_params(req: &Request) -> AppResult<AvailabilityParams> {
    let room = req
        .query::<String>("room")
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("room is required".to_string()))?;
    let room = room
        .trim()
        .parse::<i64>()
        .map_err(|_err| AppError::BadRequest("room must be an integer".to_string()))?;

    Ok(AvailabilityParams {
        room,
        start: parse_date("start", req.query::<String>("start"))?,
        end: parse_date("end", req.query::<String>("end"))?,
    })
}

async fn load_availability(req: &Request, depot: &Depot) -> AppResult<AvailabilityReport> {
    let params = parse_params(req)?;
    let today = today_from_depot(depot)?;
    let window = resolve_window(params.start, params.end, today)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(availability(&mut conn, params.room, window).await?)
}

/// ## Summary
/// Reports taken and free places per day for one room.
///
/// ## Errors
/// 400 for a missing or malformed parameter, a reversed window or one wider
/// than the cap; 404 for an unknown room.
#[handler]
#[tracing::instrument(skip_all, fields(query = ?req.uri().query()))]
async fn get_availability(req: &mut Request, depot: &Depot, res: &mut Response) {
    match load_availability(req, depot).await {
        Ok(report) => res.render(Json(report)),
        Err(err) => render_error(res, &err),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AVAILABILITY_ROUTE_COMPONENT).get(get_availability)
}

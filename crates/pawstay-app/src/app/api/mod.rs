mod app_specific;
mod availability;
mod reservations;
mod rooms;

use salvo::Router;

use crate::middleware::auth::AuthMiddleware;

pub use pawstay_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, AVAILABILITY_ROUTE_COMPONENT,
    AVAILABILITY_ROUTE_PREFIX, RESERVATIONS_ROUTE_COMPONENT, RESERVATIONS_ROUTE_PREFIX,
    ROOMS_ROUTE_COMPONENT, ROOMS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the `/api` router with every booking handler behind authentication.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(app_specific::routes())
        .push(rooms::routes())
        .push(availability::routes())
        .push(reservations::routes())
}

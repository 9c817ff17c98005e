use salvo::Depot;
use salvo::http::StatusCode;
use tracing::error;

use crate::{config::get_config_from_depot, db_handler::get_db_from_depot};
use pawstay_service::auth::{DepotUser, authenticate::authenticate, depot_keys};
use pawstay_service::error::ServiceError;

/// ## Summary
/// Resolves the request's owner and stores it in the depot.
///
/// Requests without an identity continue as [`DepotUser::Public`]; handlers
/// that need an owner answer 401 for them.
///
/// ## Side Effects
/// May create the owner's user row on first sight.
///
/// ## Errors
/// Responds 500 if config or the database provider are missing, 503 if no
/// connection is available.
pub struct AuthMiddleware;

#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let provider = match get_db_from_depot(depot) {
            Ok(p) => p,
            Err(e) => {
                error!(error = ?e, "Failed to get database provider from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let mut conn = match provider.get_connection().await {
            Ok(c) => c,
            Err(e) => {
                error!(error = ?e, "Failed to get database connection");
                res.status_code(StatusCode::SERVICE_UNAVAILABLE);
                ctrl.skip_rest();
                return;
            }
        };

        match authenticate(req, &mut conn, &config).await {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "User authenticated");
                depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::User(user));
            }
            Err(ServiceError::NotAuthenticated | ServiceError::InvalidConfiguration(_)) => {
                tracing::debug!("Request not authenticated, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_USER, DepotUser::Public);
            }
            Err(service_err) => {
                error!(error = ?service_err, "Authentication failed with error");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                res.body("Internal Server Error");
                ctrl.skip_rest();
            }
        }
    }
}

//! Depot plumbing for the booking database.

use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use pawstay_core::error::CoreError;
use pawstay_db::db::DbProvider;

type SharedProvider = Arc<dyn DbProvider + Send + Sync>;

/// Hoop that makes the connection pool available to every booking handler.
///
/// Handlers check out a connection only after their input has been parsed,
/// so malformed requests never hold one.
pub struct DbProviderHandler<T: DbProvider + Send + Sync + Clone> {
    pub provider: T,
}

#[async_trait]
impl<T: DbProvider + Send + Sync + Clone + 'static> salvo::Handler for DbProviderHandler<T> {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let provider: SharedProvider = Arc::new(self.provider.clone());
        depot.inject(provider);
    }
}

/// ## Summary
/// Returns the provider injected by [`DbProviderHandler`].
///
/// ## Errors
/// Returns an invariant violation, reported as 500, when the hoop is missing
/// from the router.
pub fn get_db_from_depot(depot: &salvo::Depot) -> AppResult<SharedProvider> {
    depot
        .obtain::<SharedProvider>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Database provider not found in depot").into())
}

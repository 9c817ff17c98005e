use std::sync::Arc;

use chrono::NaiveDate;
use salvo::async_trait;

pub use pawstay_core::config::*;
use pawstay_core::error::CoreError;
use pawstay_core::util::calendar::today_in;

use crate::error::{AppError, AppResult};

/// Makes the loaded [`Settings`] available to every handler below it.
pub struct ConfigHandler {
    pub settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the application configuration from the depot.
///
/// ## Errors
/// Returns an error if the configuration is not found in the depot.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot.obtain::<Arc<Settings>>().cloned().map_err(|_err| {
        AppError::CoreError(CoreError::InvariantViolation(
            "Configuration not found in depot",
        ))
    })
}

/// ## Summary
/// Today's date in the booking time zone.
///
/// ## Errors
/// Returns an error if the configuration is missing or names an unknown zone.
pub fn today_from_depot(depot: &salvo::Depot) -> AppResult<NaiveDate> {
    let settings = get_config_from_depot(depot)?;
    Ok(today_in(&settings.booking.time_zone)?)
}

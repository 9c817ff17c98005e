use chrono::NaiveDate;
use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use pawstay_core::error::CoreError;
use pawstay_db::error::DbError;
use pawstay_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// First day without a free slot, for capacity failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NaiveDate>,
}

fn db_status(err: &DbError) -> StatusCode {
    match err {
        DbError::PoolError(_) => StatusCode::SERVICE_UNAVAILABLE,
        DbError::CoreError(core) => core_status(core),
        DbError::DatabaseError(_) | DbError::MigrationError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

const fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::ConfigError(_) | CoreError::InvariantViolation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl AppError {
    /// ## Summary
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(err) => core_status(err),
            Self::DatabaseError(err) => db_status(err),
            Self::ServiceError(err) => match err {
                ServiceError::InvalidDateRange(_)
                | ServiceError::ImmutabilityViolation
                | ServiceError::InvalidWindow(_)
                | ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
                ServiceError::NotAuthenticated => StatusCode::UNAUTHORIZED,
                ServiceError::Unauthorized(_) => StatusCode::FORBIDDEN,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::NoCapacity { .. } => StatusCode::CONFLICT,
                ServiceError::DatabaseError(db) => db_status(db),
                ServiceError::CoreError(core) => core_status(core),
                ServiceError::DieselError(_) | ServiceError::InvalidConfiguration(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// ## Summary
    /// Builds the response body. Server-side failures are not described to the client.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        let status = self.status_code();
        let error = if status.is_server_error() {
            status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string()
        } else {
            self.to_string()
        };
        let day = match self {
            Self::ServiceError(ServiceError::NoCapacity { day, .. }) => Some(*day),
            _ => None,
        };
        ErrorResponse { error, day }
    }
}

/// ## Summary
/// Writes an error as a JSON response with its mapped status code.
pub fn render_error(res: &mut salvo::Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %err, status = status.as_u16(), "Request rejected");
    }
    res.status_code(status);
    res.render(Json(err.to_response()));
}

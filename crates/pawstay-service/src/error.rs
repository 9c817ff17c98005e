use chrono::NaiveDate;
use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] pawstay_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] pawstay_core::error::CoreError),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Room, start date and end date cannot be changed; cancel the reservation and create a new one")]
    ImmutabilityViolation,

    #[error("No free place in room {room_id} on {day}")]
    NoCapacity { room_id: i64, day: NaiveDate },

    #[error("Invalid availability window: {0}")]
    InvalidWindow(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

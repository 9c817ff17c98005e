//! Input checks applied before anything is written.

use chrono::{Days, NaiveDate};

use pawstay_core::constants::DOG_NAME_MAX_CHARS;
use pawstay_db::model::reservation::Reservation;

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Checks a requested stay against the civil date `today`.
///
/// A stay must not end before it starts, must not start in the past and must
/// end no earlier than tomorrow.
///
/// ## Errors
/// Returns `InvalidDateRange` describing the first rule that fails.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> ServiceResult<()> {
    if end < start {
        return Err(ServiceError::InvalidDateRange(format!(
            "end date {end} is before start date {start}"
        )));
    }

    if start < today {
        return Err(ServiceError::InvalidDateRange(format!(
            "start date {start} is in the past"
        )));
    }

    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| ServiceError::InvalidDateRange("date out of range".to_string()))?;
    if end < tomorrow {
        return Err(ServiceError::InvalidDateRange(format!(
            "end date must be {tomorrow} or later"
        )));
    }

    Ok(())
}

/// ## Summary
/// Trims a dog name and checks it is present and short enough.
///
/// ## Errors
/// Returns `ValidationError` if the name is blank or too long.
pub fn normalize_dog_name(name: &str) -> ServiceResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::ValidationError(
            "dog name is required".to_string(),
        ));
    }
    if trimmed.chars().count() > DOG_NAME_MAX_CHARS {
        return Err(ServiceError::ValidationError(format!(
            "dog name must be at most {DOG_NAME_MAX_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// The frozen fields of a reservation as a caller wants to write them.
/// `None` means "not supplied".
#[derive(Debug, Clone, Copy, Default)]
pub struct FrozenFields {
    pub room_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// ## Summary
/// Rejects any write that would move a persisted reservation to another room
/// or other dates.
///
/// ## Errors
/// Returns `ImmutabilityViolation` if a supplied value differs from the stored one.
pub fn check_frozen_fields(persisted: &Reservation, incoming: FrozenFields) -> ServiceResult<()> {
    let room_changed = incoming.room_id.is_some_and(|id| id != persisted.room_id);
    let start_changed = incoming
        .start_date
        .is_some_and(|day| day != persisted.start_date);
    let end_changed = incoming.end_date.is_some_and(|day| day != persisted.end_date);

    if room_changed || start_changed || end_changed {
        tracing::warn!(
            reservation_id = persisted.id,
            room_changed,
            start_changed,
            end_changed,
            "Rejected change to frozen reservation fields"
        );
        return Err(ServiceError::ImmutabilityViolation);
    }

    Ok(())
}

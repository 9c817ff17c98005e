//! Per-day occupancy of a room over a window.
//!
//! A single grouped read against the slot table; no locks are taken, so the
//! result is a point-in-time snapshot.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use pawstay_core::constants::{AVAILABILITY_DEFAULT_WINDOW_DAYS, AVAILABILITY_MAX_WINDOW_DAYS};
use pawstay_core::util::calendar::InclusiveDays;
use pawstay_db::db::connection::DbConnection;
use pawstay_db::db::query::{day_slot, room};

use crate::error::{ServiceError, ServiceResult};

/// A validated inclusive date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub taken: i64,
    pub free: i64,
}

/// Availability of one room over a window, one entry per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub room: i64,
    pub room_name: String,
    pub capacity: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DayAvailability>,
}

/// ## Summary
/// Fills in the default window bounds and checks the result.
///
/// A missing `start` is `today`; a missing `end` is `today` plus the default
/// window length.
///
/// ## Errors
/// Returns `InvalidWindow` if `end < start` or the window is wider than the cap.
pub fn resolve_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> ServiceResult<Window> {
    let start = start.unwrap_or(today);
    let end = match end {
        Some(end) => end,
        None => today
            .checked_add_days(Days::new(AVAILABILITY_DEFAULT_WINDOW_DAYS.unsigned_abs()))
            .ok_or_else(|| ServiceError::InvalidWindow("date out of range".to_string()))?,
    };

    if end < start {
        return Err(ServiceError::InvalidWindow(format!(
            "end {end} is before start {start}"
        )));
    }
    if (end - start).num_days() > AVAILABILITY_MAX_WINDOW_DAYS {
        return Err(ServiceError::InvalidWindow(format!(
            "window may span at most {AVAILABILITY_MAX_WINDOW_DAYS} days"
        )));
    }

    Ok(Window { start, end })
}

/// ## Summary
/// Turns sparse per-day counts into one entry per day of the window.
///
/// Days without slots report `taken = 0`. `free` never goes below zero, which
/// can otherwise happen after a capacity reduction.
#[must_use]
pub fn build_days(capacity: i32, window: Window, counts: &[(NaiveDate, i64)]) -> Vec<DayAvailability> {
    let taken_by_day: HashMap<NaiveDate, i64> = counts.iter().copied().collect();
    InclusiveDays::new(window.start, window.end)
        .map(|date| {
            let taken = taken_by_day.get(&date).copied().unwrap_or(0);
            DayAvailability {
                date,
                taken,
                free: (i64::from(capacity) - taken).max(0),
            }
        })
        .collect()
}

/// ## Summary
/// Reports taken and free capacity for every day of the window.
///
/// ## Errors
/// Returns `NotFound` if the room does not exist, or a database error.
#[tracing::instrument(skip(conn), fields(start = %window.start, end = %window.end))]
pub async fn availability(
    conn: &mut DbConnection<'_>,
    room_id: i64,
    window: Window,
) -> ServiceResult<AvailabilityReport> {
    let room = room::get_room(conn, room_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("room {room_id}")))?;

    let counts = day_slot::count_by_day(conn, room.id, window.start, window.end).await?;
    let days = build_days(room.capacity, window, &counts);

    tracing::debug!(days = days.len(), "Availability computed");

    Ok(AvailabilityReport {
        room: room.id,
        room_name: room.name,
        capacity: room.capacity,
        start: window.start,
        end: window.end,
        days,
    })
}

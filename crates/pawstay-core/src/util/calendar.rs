//! Calendar-day helpers.
//!
//! ## Summary
//! Booking works on whole civil days. Ranges are inclusive on both ends, so
//! a stay from the 10th to the 12th occupies three days.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// Iterator over every day in `[start, end]`, ascending.
///
/// Yields nothing when `end < start`.
#[derive(Debug, Clone)]
pub struct InclusiveDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl InclusiveDays {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for InclusiveDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|day| *day <= self.end);
        Some(current)
    }
}

/// Number of days in the inclusive range `[start, end]`, or 0 when `end < start`.
#[must_use]
pub fn inclusive_len(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(0)
}

/// ## Summary
/// Returns today's date in the civil calendar of the named IANA time zone.
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the zone name is not recognised.
pub fn today_in(time_zone: &str) -> CoreResult<NaiveDate> {
    let tz: Tz = time_zone
        .parse()
        .map_err(|_err| CoreError::ConfigError(format!("unknown time zone '{time_zone}'")))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

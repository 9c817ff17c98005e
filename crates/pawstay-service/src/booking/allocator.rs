//! Day-slot allocation.
//!
//! ## Summary
//! A reservation over `[start, end]` needs one slot per day. For each day the
//! allocator probes slot indices `1..=capacity` in order and keeps the first
//! insert the store accepts. Capacity is never checked by counting: the store's
//! uniqueness guarantee on `(room, day, slot_index)` decides every race.
//!
//! If some day has no free index, every slot already claimed for the
//! reservation is released and the request fails with `NoCapacity` for that day.

use chrono::NaiveDate;
use serde::Serialize;

use pawstay_core::util::calendar::{InclusiveDays, inclusive_len};
use pawstay_db::db::slot_store::{SlotClaim, SlotStore};
use pawstay_db::model::day_slot::NewDaySlot;
use pawstay_db::model::reservation::Reservation;

use crate::error::{ServiceError, ServiceResult};

/// What to allocate, and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRequest {
    pub room_id: i64,
    pub capacity: i32,
    pub reservation_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AllocationRequest {
    /// Builds the request for a persisted reservation in a room of the given capacity.
    #[must_use]
    pub const fn for_reservation(reservation: &Reservation, capacity: i32) -> Self {
        Self {
            room_id: reservation.room_id,
            capacity,
            reservation_id: reservation.id,
            start: reservation.start_date,
            end: reservation.end_date,
        }
    }
}

/// One slot held by a successful allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClaimedSlot {
    pub day: NaiveDate,
    pub slot_index: i32,
}

/// ## Summary
/// Claims one slot for every day of the request, or none at all.
///
/// ## Side Effects
/// - Inserts one day slot per day on success
/// - On failure, deletes every slot the reservation holds
///
/// ## Errors
/// Returns `NoCapacity` with the first day that could not be satisfied, or a
/// storage error. Storage errors leave cleanup to the enclosing transaction.
#[tracing::instrument(skip(store), fields(
    room_id = request.room_id,
    reservation_id = request.reservation_id,
    capacity = request.capacity,
    start = %request.start,
    end = %request.end
))]
pub async fn allocate<S: SlotStore>(
    store: &mut S,
    request: &AllocationRequest,
) -> ServiceResult<Vec<ClaimedSlot>> {
    let expected = usize::try_from(inclusive_len(request.start, request.end)).unwrap_or(0);
    let mut claimed = Vec::with_capacity(expected);

    for day in InclusiveDays::new(request.start, request.end) {
        if let Some(slot_index) = claim_day(store, request, day).await? {
            claimed.push(ClaimedSlot { day, slot_index });
            continue;
        }

        let released = store.release_reservation(request.reservation_id).await?;
        tracing::info!(
            day = %day,
            released,
            "No free slot left; allocation rolled back"
        );
        return Err(ServiceError::NoCapacity {
            room_id: request.room_id,
            day,
        });
    }

    tracing::debug!(days = claimed.len(), "Allocation complete");

    Ok(claimed)
}

/// Probes slot indices for one day; returns the index claimed, if any.
async fn claim_day<S: SlotStore>(
    store: &mut S,
    request: &AllocationRequest,
    day: NaiveDate,
) -> ServiceResult<Option<i32>> {
    for slot_index in 1..=request.capacity {
        let slot = NewDaySlot {
            room_id: request.room_id,
            day,
            slot_index,
            reservation_id: request.reservation_id,
        };
        match store.claim(slot).await? {
            SlotClaim::Claimed => return Ok(Some(slot_index)),
            SlotClaim::Taken => {}
        }
    }
    Ok(None)
}

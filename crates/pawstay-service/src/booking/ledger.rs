//! Reservation lifecycle.
//!
//! ## Summary
//! A reservation row and its day slots are one unit: creation inserts the row
//! and allocates in a single transaction, cancellation removes slots and row in
//! a single transaction. Room and dates never change after creation.

use chrono::NaiveDate;
use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawstay_core::constants::MAX_PAGE_SIZE;
use pawstay_core::util::calendar::inclusive_len;
use pawstay_db::db::connection::DbConnection;
use pawstay_db::db::query::{day_slot, reservation, room};
use pawstay_db::db::slot_store::PgSlotStore;
use pawstay_db::db::transaction::with_transaction;
use pawstay_db::model::reservation::{NewReservation, Reservation, ReservationChangeset};
use pawstay_db::model::room::Room;

use super::allocator::{AllocationRequest, allocate};
use super::validation::{FrozenFields, check_frozen_fields, normalize_dog_name, validate_date_range};
use crate::error::{ServiceError, ServiceResult};

/// Input for creating a reservation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReservationRequest {
    pub room_id: i64,
    pub dog_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

/// Fields a client may send when editing a reservation.
///
/// `room_id`, `start_date` and `end_date` are accepted only so that a change
/// to them can be rejected; sending the stored values is allowed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationUpdate {
    pub dog_name: Option<String>,
    pub notes: Option<String>,
    pub room_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReservationUpdate {
    const fn frozen_fields(&self) -> FrozenFields {
        FrozenFields {
            room_id: self.room_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// A reservation with its room and the price of the stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationSummary {
    pub reservation: Reservation,
    pub room: Room,
    /// Occupied days, counting both ends.
    pub days: i64,
    pub total: Decimal,
}

impl ReservationSummary {
    #[must_use]
    pub fn new(reservation: Reservation, room: Room) -> Self {
        let days = inclusive_len(reservation.start_date, reservation.end_date);
        let total = room.price_per_day * Decimal::from(days);
        Self {
            reservation,
            room,
            days,
            total,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub num_pages: i64,
}

/// Resolved paging parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
    pub num_pages: i64,
    pub offset: i64,
}

/// ## Summary
/// Clamps paging input: the page size to `[1, MAX_PAGE_SIZE]` and the 1-based
/// page to `[1, num_pages]`. An empty listing still has one (empty) page.
#[must_use]
pub fn page_window(total: i64, page: i64, page_size: i64) -> PageWindow {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let num_pages = ((total.max(0) + page_size - 1) / page_size).max(1);
    let page = page.clamp(1, num_pages);
    PageWindow {
        page,
        page_size,
        num_pages,
        offset: (page - 1) * page_size,
    }
}

/// ## Summary
/// Creates a reservation and claims one slot for every day of it.
///
/// ## Side Effects
/// - Inserts the reservation row and one day slot per day, atomically
///
/// ## Errors
/// - `ValidationError` for a blank or overlong dog name
/// - `InvalidDateRange` if the dates break the range rules relative to `today`
/// - `NotFound` if the room does not exist
/// - `NoCapacity` with the first full day; nothing is persisted
/// - Database errors; the transaction is rolled back
#[tracing::instrument(skip(conn, request), fields(
    room_id = request.room_id,
    start = %request.start_date,
    end = %request.end_date
))]
pub async fn create_reservation(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    request: &NewReservationRequest,
    today: NaiveDate,
) -> ServiceResult<ReservationSummary> {
    let dog_name = normalize_dog_name(&request.dog_name)?;
    validate_date_range(request.start_date, request.end_date, today)?;

    let room = room::get_room(conn, request.room_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("room {}", request.room_id)))?;

    let room_id = room.id;
    let capacity = room.capacity;
    let start_date = request.start_date;
    let end_date = request.end_date;
    let notes = request.notes.trim().to_string();

    let created = conn
        .transaction::<_, ServiceError, _>(move |tx| {
            async move {
                let new_reservation = NewReservation {
                    owner_id,
                    room_id,
                    dog_name: &dog_name,
                    start_date,
                    end_date,
                    notes: &notes,
                };
                let created = reservation::create_reservation(tx, &new_reservation).await?;

                let allocation = AllocationRequest::for_reservation(&created, capacity);
                let outcome = allocate(&mut PgSlotStore::new(tx), &allocation).await;

                if let Err(err) = outcome {
                    if matches!(err, ServiceError::NoCapacity { .. }) {
                        reservation::delete_reservation(tx, created.id).await?;
                    }
                    return Err(err);
                }

                Ok(created)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(reservation_id = created.id, owner_id, "Reservation created");

    Ok(ReservationSummary::new(created, room))
}

/// Maps a row that vanished between lookup and write to `NotFound`.
fn reservation_lookup_error(reservation_id: i64, err: diesel::result::Error) -> ServiceError {
    match err {
        diesel::result::Error::NotFound => {
            ServiceError::NotFound(format!("reservation {reservation_id}"))
        }
        other => other.into(),
    }
}

/// Loads a reservation with its room and checks that `owner_id` holds it.
async fn owned_reservation(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    reservation_id: i64,
) -> ServiceResult<(Reservation, Room)> {
    let (found, room) = reservation::get_with_room(conn, reservation_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("reservation {reservation_id}")))?;

    if found.owner_id != owner_id {
        tracing::warn!(
            reservation_id,
            owner_id,
            "Access to another owner's reservation denied"
        );
        return Err(ServiceError::Unauthorized(format!(
            "reservation {reservation_id} belongs to another user"
        )));
    }

    Ok((found, room))
}

/// ## Summary
/// Returns one of the owner's reservations.
///
/// ## Errors
/// Returns `NotFound`, `Unauthorized` for another owner's reservation, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn get_reservation(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    reservation_id: i64,
) -> ServiceResult<ReservationSummary> {
    let (found, room) = owned_reservation(conn, owner_id, reservation_id).await?;
    Ok(ReservationSummary::new(found, room))
}

/// ## Summary
/// Lists the owner's reservations, latest stay first.
///
/// ## Errors
/// Returns a database error if a query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_reservations(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    page: i64,
    page_size: i64,
) -> ServiceResult<Page<ReservationSummary>> {
    let total = reservation::count_by_owner(conn, owner_id).await?;
    let window = page_window(total, page, page_size);

    let items = reservation::list_by_owner(conn, owner_id, window.offset, window.page_size)
        .await?
        .into_iter()
        .map(|(found, room)| ReservationSummary::new(found, room))
        .collect();

    Ok(Page {
        items,
        total,
        page: window.page,
        page_size: window.page_size,
        num_pages: window.num_pages,
    })
}

/// ## Summary
/// Edits the dog name and notes of a reservation.
///
/// ## Errors
/// - `ImmutabilityViolation` if the update would move the room or dates
/// - `ValidationError` for a blank or overlong dog name
/// - `NotFound`, `Unauthorized`, or a database error
#[tracing::instrument(skip(conn, update))]
pub async fn update_reservation(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    reservation_id: i64,
    update: &ReservationUpdate,
) -> ServiceResult<ReservationSummary> {
    let (persisted, room) = owned_reservation(conn, owner_id, reservation_id).await?;
    check_frozen_fields(&persisted, update.frozen_fields())?;

    let dog_name = update
        .dog_name
        .as_deref()
        .map(normalize_dog_name)
        .transpose()?;
    let notes = update.notes.as_deref().map(str::trim);

    let changes = ReservationChangeset {
        dog_name: dog_name.as_deref(),
        notes,
    };
    let updated = reservation::update_reservation(conn, persisted.id, &changes)
        .await
        .map_err(|err| reservation_lookup_error(reservation_id, err))?;

    tracing::info!(reservation_id, "Reservation updated");

    Ok(ReservationSummary::new(updated, room))
}

/// ## Summary
/// Cancels a reservation, releasing its day slots.
///
/// ## Side Effects
/// - Deletes every day slot of the reservation, then the reservation row
///
/// ## Errors
/// Returns `NotFound`, also when a concurrent cancel removed the row first,
/// `Unauthorized`, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn cancel_reservation(
    conn: &mut DbConnection<'_>,
    owner_id: i64,
    reservation_id: i64,
) -> ServiceResult<usize> {
    let (persisted, _room) = owned_reservation(conn, owner_id, reservation_id).await?;
    let id = persisted.id;

    let released = with_transaction(conn, move |tx| {
        async move {
            let released = day_slot::delete_by_reservation(tx, id).await?;
            if reservation::delete_reservation(tx, id).await? == 0 {
                return Err(ServiceError::NotFound(format!("reservation {id}")));
            }
            Ok::<_, ServiceError>(released)
        }
        .scope_boxed()
    })
    .await?;

    tracing::info!(reservation_id, released, "Reservation cancelled");

    Ok(released)
}

//! The slot store: the single coordination point for room capacity.
//!
//! ## Summary
//! A slot claim is an insert of `(room_id, day, slot_index, reservation_id)`
//! guarded by the storage-level unique constraint. A claim that loses a race
//! reports [`SlotClaim::Taken`]; it never blocks further claims in the same
//! enclosing transaction.

use std::future::Future;

use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::query::day_slot;
use crate::error::DbResult;
use crate::model::day_slot::NewDaySlot;

/// Outcome of a single slot claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClaim {
    /// The slot was free and now belongs to the reservation.
    Claimed,
    /// Another reservation already holds this exact slot.
    Taken,
}

/// Storage operations the allocator needs.
pub trait SlotStore: Send {
    /// Attempts to insert one slot. A uniqueness conflict is reported as
    /// [`SlotClaim::Taken`]; any other failure is an error.
    fn claim(&mut self, slot: NewDaySlot) -> impl Future<Output = DbResult<SlotClaim>> + Send;

    /// Removes every slot held by the reservation and returns how many there were.
    fn release_reservation(
        &mut self,
        reservation_id: i64,
    ) -> impl Future<Output = DbResult<usize>> + Send;
}

/// Postgres slot store bound to a connection that is inside a transaction.
///
/// Each claim runs in its own savepoint so a unique violation rolls back only
/// that insert.
pub struct PgSlotStore<'c, 'pool> {
    conn: &'c mut DbConnection<'pool>,
}

impl<'c, 'pool> PgSlotStore<'c, 'pool> {
    #[must_use]
    pub fn new(conn: &'c mut DbConnection<'pool>) -> Self {
        Self { conn }
    }
}

impl SlotStore for PgSlotStore<'_, '_> {
    async fn claim(&mut self, slot: NewDaySlot) -> DbResult<SlotClaim> {
        let inserted = self
            .conn
            .transaction::<_, diesel::result::Error, _>(|savepoint| {
                async move { day_slot::insert_slot(savepoint, &slot).await }.scope_boxed()
            })
            .await;

        match inserted {
            Ok(_) => Ok(SlotClaim::Claimed),
            Err(err) if day_slot::is_slot_conflict(&err) => {
                tracing::trace!(
                    room_id = slot.room_id,
                    day = %slot.day,
                    slot_index = slot.slot_index,
                    "Slot already taken"
                );
                Ok(SlotClaim::Taken)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn release_reservation(&mut self, reservation_id: i64) -> DbResult<usize> {
        Ok(day_slot::delete_by_reservation(self.conn, reservation_id).await?)
    }
}

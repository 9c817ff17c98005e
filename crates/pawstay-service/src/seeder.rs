//! Room seeder.
//!
//! ## Summary
//! Reconciles the room table to exactly one room per type with a fixed name and
//! capacity. Running it again on a reconciled table changes nothing.
//!
//! The whole run is one transaction, so bookings never see a half-seeded registry.

use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;
use rust_decimal::Decimal;
use serde::Serialize;

use pawstay_db::db::connection::DbConnection;
use pawstay_db::db::enums::RoomType;
use pawstay_db::db::query::room;
use pawstay_db::model::room::{NewRoom, Room, RoomChangeset};

use crate::error::{ServiceError, ServiceResult};

/// The room every type must end up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTarget {
    pub room_type: RoomType,
    pub name: &'static str,
    pub capacity: i32,
}

pub const SEED_TARGETS: [SeedTarget; 3] = [
    SeedTarget {
        room_type: RoomType::Indoor,
        name: "Indoor room",
        capacity: 5,
    },
    SeedTarget {
        room_type: RoomType::Kennel,
        name: "Kennel",
        capacity: 5,
    },
    SeedTarget {
        room_type: RoomType::Yard,
        name: "Shared yard",
        capacity: 10,
    },
];

/// Row counts touched by one seeder run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

impl std::fmt::Display for SeedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "created={} updated={} deleted={}",
            self.created, self.updated, self.deleted
        )
    }
}

/// ## Summary
/// Returns the fields of `existing` that differ from the target.
#[must_use]
pub fn plan_changes(existing: &Room, target: &SeedTarget) -> RoomChangeset<'static> {
    RoomChangeset {
        name: (existing.name != target.name).then_some(target.name),
        capacity: (existing.capacity != target.capacity).then_some(target.capacity),
    }
}

/// ## Summary
/// Runs the reconciliation.
///
/// 1. Keeps the oldest room of each known type and deletes the others.
/// 2. Creates each target room if absent, otherwise updates differing fields.
/// 3. Deletes rooms of any other type.
///
/// ## Errors
/// Returns a database error, for example when a room to delete still has
/// reservations. Nothing is changed in that case.
#[tracing::instrument(skip(conn))]
pub async fn seed_rooms(conn: &mut DbConnection<'_>) -> ServiceResult<SeedReport> {
    let report = conn
        .transaction::<_, ServiceError, _>(|tx| {
            async move {
                let mut report = SeedReport::default();

                for target in &SEED_TARGETS {
                    let rooms = room::by_type_oldest_first(tx, target.room_type).await?;
                    let mut rooms = rooms.into_iter();
                    let kept = rooms.next();
                    let extra: Vec<i64> = rooms.map(|extra| extra.id).collect();
                    report.deleted += room::delete_rooms(tx, &extra).await?;

                    match kept {
                        None => {
                            let new_room = NewRoom {
                                name: target.name,
                                room_type: target.room_type,
                                capacity: target.capacity,
                                price_per_day: Decimal::ZERO,
                                description: "",
                            };
                            let created = room::create_room(tx, &new_room).await?;
                            tracing::debug!(room_id = created.id, room_type = %target.room_type, "Room created");
                            report.created += 1;
                        }
                        Some(existing) => {
                            let changes = plan_changes(&existing, target);
                            if !changes.is_empty() {
                                room::update_room(tx, existing.id, &changes).await?;
                                tracing::debug!(room_id = existing.id, room_type = %target.room_type, "Room updated");
                                report.updated += 1;
                            }
                        }
                    }
                }

                report.deleted += room::delete_unknown_types(tx).await?;

                Ok(report)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        created = report.created,
        updated = report.updated,
        deleted = report.deleted,
        "Room seeding complete"
    );

    Ok(report)
}

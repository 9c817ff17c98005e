use diesel::{pg::Pg, prelude::*};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::{enums::RoomType, schema};

/// A bookable resource with a per-day capacity.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = schema::room)]
#[diesel(check_for_backend(Pg))]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub price_per_day: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::room)]
pub struct NewRoom<'a> {
    pub name: &'a str,
    pub room_type: RoomType,
    pub capacity: i32,
    pub price_per_day: Decimal,
    pub description: &'a str,
}

/// Partial update applied by the room seeder.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::room)]
pub struct RoomChangeset<'a> {
    pub name: Option<&'a str>,
    pub capacity: Option<i32>,
}

impl RoomChangeset<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.capacity.is_none()
    }
}

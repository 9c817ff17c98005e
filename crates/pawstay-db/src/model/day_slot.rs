use chrono::NaiveDate;
use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// One claimed lane of a room on one day, held by one reservation.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::day_slot)]
#[diesel(check_for_backend(Pg))]
pub struct DaySlot {
    pub id: i64,
    pub room_id: i64,
    pub day: NaiveDate,
    pub slot_index: i32,
    pub reservation_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::day_slot)]
pub struct NewDaySlot {
    pub room_id: i64,
    pub day: NaiveDate,
    pub slot_index: i32,
    pub reservation_id: i64,
}

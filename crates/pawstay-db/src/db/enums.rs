//! Database enum types with Diesel serialization.
//!
//! This module provides type-safe enum wrappers for text columns with a closed set of values.
//! Each enum implements `ToSql` and `FromSql` for automatic conversion between Rust and `PostgreSQL`.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;

/// Room type classification.
///
/// Maps to `room.room_type`. The column itself is unconstrained; reads through
/// this type fail for values outside the closed set, so registry queries filter
/// on [`RoomType::ALL`] first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Indoor,
    Kennel,
    Yard,
}

impl RoomType {
    pub const ALL: [Self; 3] = [Self::Indoor, Self::Kennel, Self::Yard];

    /// Returns the database string representation of this room type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Kennel => "kennel",
            Self::Yard => "yard",
        }
    }
}

impl ToSql<Text, Pg> for RoomType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for RoomType {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"indoor" => Ok(Self::Indoor),
            b"kennel" => Ok(Self::Kennel),
            b"yard" => Ok(Self::Yard),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

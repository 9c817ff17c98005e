use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// A reservation owner. Identity lives outside this service; only the email
/// supplied by the authentication layer is recorded.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::app_user)]
#[diesel(check_for_backend(Pg))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::app_user)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

//! Reservation owner queries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::app_user;
use crate::model::user::{NewUser, User};

/// ## Summary
/// Looks up a user by email.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn by_email(conn: &mut DbConnection<'_>, email: &str) -> QueryResult<Option<User>> {
    app_user::table
        .filter(app_user::email.eq(email))
        .select(User::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Returns the user with this email, inserting it first if needed.
///
/// Concurrent first requests for the same email converge on one row.
///
/// ## Errors
/// Returns a database error if the insert or lookup fails.
pub async fn get_or_create(conn: &mut DbConnection<'_>, new_user: &NewUser<'_>) -> QueryResult<User> {
    diesel::insert_into(app_user::table)
        .values(new_user)
        .on_conflict(app_user::email)
        .do_nothing()
        .execute(conn)
        .await?;

    app_user::table
        .filter(app_user::email.eq(new_user.email))
        .select(User::as_select())
        .first(conn)
        .await
}

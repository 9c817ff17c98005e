//! Transaction helper utilities for database operations.
//!
//! ## Usage
//!
//! Diesel-async provides built-in transaction support through the `AsyncConnection::transaction`
//! method. Calling it on a connection that is already inside a transaction opens a `SAVEPOINT`
//! instead, so a failing inner scope rolls back only its own work:
//!
//! ```rust,ignore
//! use diesel_async::scoped_futures::ScopedFutureExt;
//! use crate::db::transaction::with_transaction;
//!
//! with_transaction(conn, |tx| async move {
//!     day_slot::delete_by_reservation(tx, reservation_id).await?;
//!     reservation::delete_reservation(tx, reservation_id).await?;
//!     Ok(())
//! }.scope_boxed()).await?;
//! ```

use diesel_async::{AsyncConnection, scoped_futures::ScopedBoxFuture};

use crate::db::connection::DbConnection;

/// ## Summary
/// Runs a database transaction (or savepoint, when nested) and returns the closure result.
///
/// ## Errors
/// Returns any error produced by the closure, or errors raised while starting
/// or committing the transaction. The scope is rolled back on any error.
pub async fn with_transaction<'a, 'conn, 'pool, T, E, F>(
    conn: &'conn mut DbConnection<'pool>,
    callback: F,
) -> Result<T, E>
where
    F: for<'r> FnOnce(&'r mut DbConnection<'pool>) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
        + Send
        + 'a,
    E: From<diesel::result::Error> + Send + 'a,
    T: Send + 'a,
    'a: 'conn,
{
    conn.transaction(callback).await
}

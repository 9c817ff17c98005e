//! Postgres connection pool.
//!
//! A booking holds one pooled connection from the first read to the commit of
//! its transaction; every slot claim inside it is a savepoint on that same
//! connection. Pool size therefore bounds the number of bookings that can be
//! allocating at once.

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

use crate::db::DbProvider;
use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;

/// A checked-out connection. Query functions take `&mut DbConnection` so the
/// same value can be a plain connection or an open transaction.
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// ## Summary
/// Opens a pool of `size` connections to `database_url`.
///
/// Connections are opened eagerly and kept for the life of the process.
///
/// ## Errors
/// Returns an error if the initial connections cannot be established.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub async fn create_pool(database_url: &str, size: u32) -> anyhow::Result<DbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(size)
        .min_idle(Some(size))
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .await?;

    tracing::info!(pool_size = size, "Booking database pool ready");

    Ok(pool)
}

impl DbProvider for DbPool {
    fn get_connection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>>
    {
        Box::pin(async move {
            let conn = self.get().await.inspect_err(|err| {
                tracing::warn!(error = %err, "No database connection available");
            })?;
            Ok(conn)
        })
    }
}

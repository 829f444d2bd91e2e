//! Postgres persistence for users, clients, links, and automation logs.

use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Process-wide pool handed out by [`shared_pool`].
static SHARED_POOL: OnceCell<DbPool> = OnceCell::const_new();

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Return the process-wide pool, connecting on first use.
///
/// Concurrent first callers wait on the same initialization; a failed
/// connection attempt leaves the cell empty so a later call can retry.
/// The pool lives for the rest of the process and is never torn down.
pub async fn shared_pool(database_url: &str) -> Result<&'static DbPool, sqlx::Error> {
    SHARED_POOL
        .get_or_try_init(|| async {
            tracing::debug!("Initializing shared database pool");
            create_pool(database_url).await
        })
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

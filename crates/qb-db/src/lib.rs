pub mod models;
pub mod repositories;
pub mod schema;

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create a PostgreSQL connection pool.
///
/// The pool is the only piece of shared state in the service; every handler
/// borrows connections from it, and requests beyond `max_connections` queue
/// until one frees up.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Create the tables and indexes in [`schema`] if they are missing.
///
/// Statements are `CREATE ... IF NOT EXISTS`, so running this on every
/// startup is safe.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    for statement in schema::ALL {
        sqlx::raw_sql(statement)
            .execute(pool)
            .await
            .context("failed to apply schema")?;
    }

    Ok(())
}

pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::time::Duration;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Opens a small connection pool against the given database. Callers run
/// `schema::initialize_database` once before serving traffic.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    Ok(pool)
}

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// The batch scorer works through applications sequentially.
const MAX_CONNECTIONS: u32 = 2;
const ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Connects to the hosted Postgres holding jobs, candidates and applications.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await
        .context("Failed to connect to the applications database")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

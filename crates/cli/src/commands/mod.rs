//! CLI command implementations.

pub mod menu;
pub mod migrate;
pub mod seed;

use cafe_central_ledger::db;
use sqlx::SqlitePool;

/// Default database location when `DATABASE_URL` is unset.
const DEFAULT_DATABASE_URL: &str = "sqlite:cafe_central.db";

/// Connect to the database named by `DATABASE_URL` (or the default file).
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

    tracing::info!(%database_url, "Connecting to database");
    let pool = db::create_pool(&database_url).await?;
    Ok(pool)
}

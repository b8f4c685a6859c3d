//! Database operations for the shared `SQLite` backing store.
//!
//! ## Tables
//!
//! - `customers` - Registered customers (unique phone)
//! - `menu_items` - The catalog: current name and price per item
//! - `orders` / `order_items` - The order ledger, written only by
//!   [`OrderRepository`]
//! - `reviews` - Per-item customer reviews; aggregates are derived on demand
//!
//! No foreign-key clauses are declared: deleting a menu item that historical
//! order lines or reviews reference must succeed, and readers degrade to a
//! placeholder display for the dangling reference.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/ledger/migrations/` and run via:
//! ```bash
//! cargo run -p cafe-central-cli -- migrate
//! ```

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod reports;
pub mod reviews;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use reports::ReportRepository;
pub use reviews::ReviewRepository;

/// Embedded schema migrations, applied by the CLI and the test harness.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
///
/// Every operation either fully succeeds or fails with one of these kinds and
/// no partial write. `Database` errors are not retried internally; retrying
/// the whole operation is safe because operations are atomic.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Malformed or out-of-range input; nothing was written.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced entity does not exist or does not belong to the caller.
    #[error("not found")]
    NotFound,

    /// Uniqueness violation (e.g., duplicate phone number).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Backing-store failure from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing. Foreign-key enforcement stays
/// off: historical order lines and reviews are allowed to reference menu
/// items that have since been deleted.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string, e.g. `sqlite:cafe_central.db`
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(false)
        .busy_timeout(Duration::from_secs(10));

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

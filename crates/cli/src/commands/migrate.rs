//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! cafe-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `SQLite` connection string (default
//!   `sqlite:cafe_central.db`)

use cafe_central_ledger::db::MIGRATOR;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

//! Shared test support for Cafe Central integration tests.
//!
//! Every test runs against a fresh in-memory `SQLite` database with the full
//! schema applied, so tests are independent and need no external services.

#![cfg_attr(not(test), forbid(unsafe_code))]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use cafe_central_core::{CustomerId, ItemId, Phone, Price};
use cafe_central_ledger::db::{CatalogRepository, CustomerRepository, MIGRATOR};

/// Fresh in-memory database with all migrations applied.
///
/// The pool is capped at one connection: every pooled connection to
/// `sqlite::memory:` would otherwise get its own private database.
///
/// # Panics
///
/// Panics if the database cannot be opened or migrated; tests cannot proceed
/// without it.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Parse a price literal, panicking on bad test input.
///
/// # Panics
///
/// Panics if `s` is not a positive decimal.
#[must_use]
pub fn price(s: &str) -> Price {
    Price::parse(s).expect("test price must be valid")
}

/// Register a test customer and return its id.
///
/// # Panics
///
/// Panics if registration fails.
pub async fn register_customer(pool: &SqlitePool, name: &str, phone: &str) -> CustomerId {
    let phone = Phone::parse(phone).expect("test phone must be valid");
    CustomerRepository::new(pool)
        .create(name, &phone)
        .await
        .expect("failed to register test customer")
        .id
}

/// Add a menu item and return its id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn add_menu_item(pool: &SqlitePool, name: &str, item_price: &str) -> ItemId {
    CatalogRepository::new(pool)
        .create_item(name, price(item_price))
        .await
        .expect("failed to add test menu item")
        .id
}

//! Cafe Central Ledger - the order/cart/review transaction core.
//!
//! This crate is a library-level contract: it owns the shared `SQLite` backing
//! store and exposes request/response operations for catalog
//! management, cart staging, atomic checkout and reorder, review aggregation,
//! and read-only reporting. There is no transport layer here; any UI or
//! service front end calls these operations directly with a pool handle and a
//! resolved customer id.
//!
//! # Modules
//!
//! - [`db`] - Connection pool, embedded migrations, and the repositories
//! - [`models`] - Domain entities read from and written to the store
//! - [`cart`] - The per-session, unpersisted staging cart
//!
//! # Guarantees
//!
//! Every operation either fully succeeds or fully fails with a typed
//! [`db::RepositoryError`]; multi-row mutations (checkout, reorder,
//! multi-field menu updates) run inside a single database transaction, so a
//! concurrent reader never observes an order without its line items or a
//! half-applied update.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod db;
pub mod models;

pub use cart::{Cart, CartLine, CartView, CartViewLine};
pub use db::{
    CatalogRepository, CustomerRepository, MIGRATOR, OrderRepository, ReportRepository,
    RepositoryError, ReviewRepository, create_pool,
};
pub use models::*;

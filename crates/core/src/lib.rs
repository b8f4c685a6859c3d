//! Cafe Central Core - Shared types library.
//!
//! This crate provides common types used across all Cafe Central components:
//! - `ledger` - The order/cart/review transaction core
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, prices, phone numbers, and
//!   ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Core types for Cafe Central.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod phone;
pub mod price;
pub mod rating;

pub use id::*;
pub use phone::{Phone, PhoneError};
pub use price::{Price, PriceError};
pub use rating::{Rating, RatingError};

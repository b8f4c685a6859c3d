//! Domain entities persisted in (or derived from) the backing store.

pub mod customer;
pub mod menu;
pub mod order;
pub mod report;
pub mod review;

pub use customer::Customer;
pub use menu::MenuItem;
pub use order::{Order, OrderItem, OrderWithItems};
pub use report::{ItemRatingRow, OrderLine, OrderSummary};
pub use review::{RatingSummary, Review};

//! Read-only reporting views joining ledger rows with catalog names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafe_central_core::{ItemId, OrderId};

/// One line of a displayed order: the item's current name and the ordered
/// quantity.
///
/// `item_name` is the placeholder string when the menu item has since been
/// deleted; historical orders must still display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    /// The menu item referenced by the line.
    pub item_id: ItemId,
    /// Current item name, or the removed-item placeholder.
    pub item_name: String,
    /// Quantity ordered.
    pub quantity: i64,
}

/// An order prepared for display, with item names resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// The order id.
    pub order_id: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Opaque payment reference, if any.
    pub payment_ref: Option<String>,
    /// The order's lines with display names.
    pub lines: Vec<OrderLine>,
}

/// One row of the admin rating report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRatingRow {
    /// The rated menu item.
    pub item_id: ItemId,
    /// Current item name, or the removed-item placeholder.
    pub item_name: String,
    /// Full-precision mean rating.
    pub mean: f64,
    /// Number of reviews.
    pub rating_count: i64,
}

//! Order and order line item entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafe_central_core::{CustomerId, ItemId, OrderId, OrderItemId};

/// One checkout event.
///
/// Created atomically together with its line items; never mutated or deleted
/// afterwards. The payment reference is an opaque string recorded as given -
/// it is never validated or settled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique order id.
    pub id: OrderId,
    /// The customer who placed the order.
    pub customer_id: CustomerId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Opaque payment reference, if any. Reorders carry a
    /// `reorder:<source id>` marker here.
    pub payment_ref: Option<String>,
}

/// A single line of an order: item and quantity.
///
/// Child of exactly one order, created only as part of order creation. The
/// item reference may dangle if the menu item is later deleted; readers
/// degrade to a placeholder display rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Unique line item id.
    pub id: OrderItemId,
    /// Parent order.
    pub order_id: OrderId,
    /// The menu item ordered.
    pub item_id: ItemId,
    /// Quantity ordered, at least 1.
    pub quantity: i64,
}

/// An order together with all of its line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderWithItems {
    /// The order header.
    pub order: Order,
    /// The order's line items, in insertion order.
    pub items: Vec<OrderItem>,
}

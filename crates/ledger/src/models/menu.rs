//! Menu item entity.

use serde::{Deserialize, Serialize};

use cafe_central_core::{ItemId, Price};

/// An orderable menu item with its current name and price.
///
/// Name and price may be corrected after creation without touching historical
/// order line items; line items reference the item id only, never a price
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique item id.
    pub id: ItemId,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Current price.
    pub price: Price,
}

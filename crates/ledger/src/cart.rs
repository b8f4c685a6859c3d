//! The per-session staging cart.
//!
//! A cart belongs to exactly one customer's session and is never persisted or
//! shared: the session layer owns the value, and concurrent customers never
//! contend on it. Prices are *not* frozen at add time - [`Cart::view`]
//! recomputes subtotals from the current catalog, so a price correction
//! between add-to-cart and checkout is reflected immediately.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cafe_central_core::{CustomerId, ItemId};

use crate::db::{CatalogRepository, RepositoryError};
use crate::models::MenuItem;

/// One staged cart entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// The staged menu item.
    pub item_id: ItemId,
    /// Staged quantity, at least 1.
    pub quantity: i64,
}

/// A priced snapshot of one cart line at view time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartViewLine {
    /// The staged item with its current name and price.
    pub item: MenuItem,
    /// Staged quantity.
    pub quantity: i64,
    /// Current price times quantity.
    pub subtotal: Decimal,
}

/// A priced view of the whole cart, computed from current catalog prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartView {
    /// Priced lines in staging order.
    pub lines: Vec<CartViewLine>,
    /// Sum of all subtotals.
    pub total: Decimal,
}

/// A customer's in-progress, unpersisted selection prior to checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    customer_id: CustomerId,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart for one customer session.
    #[must_use]
    pub const fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            lines: Vec::new(),
        }
    }

    /// The customer this cart belongs to.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Stage an item in the cart.
    ///
    /// The item must resolve in the catalog *now*; adding the same item again
    /// merges into the existing line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if `quantity` is below 1.
    /// Returns `RepositoryError::NotFound` if the item is not on the menu.
    /// Returns `RepositoryError::Database` if the catalog lookup fails.
    pub async fn add(
        &mut self,
        catalog: &CatalogRepository<'_>,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<(), RepositoryError> {
        if quantity < 1 {
            return Err(RepositoryError::Validation(
                "quantity must be at least 1".to_owned(),
            ));
        }

        if catalog.get_item(item_id).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { item_id, quantity });
        }

        Ok(())
    }

    /// Price the cart against the *current* catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if a staged item has been
    /// deleted from the menu since it was added - the same outcome checkout
    /// would produce.
    /// Returns `RepositoryError::Database` if a catalog lookup fails.
    pub async fn view(
        &self,
        catalog: &CatalogRepository<'_>,
    ) -> Result<CartView, RepositoryError> {
        let mut lines = Vec::with_capacity(self.lines.len());
        let mut total = Decimal::ZERO;

        for line in &self.lines {
            let item = catalog.get_item(line.item_id).await?.ok_or_else(|| {
                RepositoryError::Validation(format!(
                    "item {} is no longer on the menu",
                    line.item_id
                ))
            })?;

            let subtotal = item.price.amount() * Decimal::from(line.quantity);
            total += subtotal;
            lines.push(CartViewLine {
                item,
                quantity: line.quantity,
                subtotal,
            });
        }

        Ok(CartView { lines, total })
    }

    /// The staged (item, quantity) pairs, ready for checkout.
    #[must_use]
    pub fn entries(&self) -> Vec<(ItemId, i64)> {
        self.lines
            .iter()
            .map(|line| (line.item_id, line.quantity))
            .collect()
    }

    /// Remove every staged line. Called by the session after a successful
    /// checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart has no staged lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of staged lines (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

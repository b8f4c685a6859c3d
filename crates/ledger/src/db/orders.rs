//! Order ledger: atomic checkout, reorder, and order history.
//!
//! This repository is the only writer of `orders` and `order_items`. Checkout
//! is one all-or-nothing transaction: either the order row and every line item
//! commit together, or nothing is persisted. An order with zero line items, or
//! line items without a parent order, is never observable - including by
//! readers running concurrently with a checkout.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use cafe_central_core::{CustomerId, ItemId, OrderId, OrderItemId};

use super::RepositoryError;
use crate::models::{Order, OrderItem, OrderWithItems};

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_id: i64,
    placed_at: DateTime<Utc>,
    payment_ref: Option<String>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            customer_id: CustomerId::new(row.customer_id),
            placed_at: row.placed_at,
            payment_ref: row.payment_ref,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    item_id: i64,
    quantity: i64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: OrderItemId::new(row.id),
            order_id: OrderId::new(row.order_id),
            item_id: ItemId::new(row.item_id),
            quantity: row.quantity,
        }
    }
}

/// Attach line items to their orders, preserving the order sequence.
fn group_items(orders: Vec<OrderRow>, items: Vec<OrderItemRow>) -> Vec<OrderWithItems> {
    let mut grouped: Vec<OrderWithItems> = orders
        .into_iter()
        .map(|row| OrderWithItems {
            order: row.into(),
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let order_id = OrderId::new(item.order_id);
        if let Some(entry) = grouped.iter_mut().find(|o| o.order.id == order_id) {
            entry.items.push(item.into());
        }
    }

    grouped
}

/// Repository for the order ledger.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert cart entries into one persisted order, atomically.
    ///
    /// Every item id is re-resolved against the catalog inside the
    /// transaction; a single miss aborts the whole checkout. The caller is
    /// responsible for clearing its cart after a successful return - cart and
    /// ledger are decoupled.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if `entries` is empty, any
    /// quantity is below 1, or any item id does not resolve in the catalog.
    /// Returns `RepositoryError::Database` if the transaction fails; nothing
    /// is persisted in that case.
    pub async fn checkout(
        &self,
        customer_id: CustomerId,
        entries: &[(ItemId, i64)],
        payment_ref: Option<&str>,
    ) -> Result<OrderId, RepositoryError> {
        if entries.is_empty() {
            return Err(RepositoryError::Validation(
                "cannot check out an empty cart".to_owned(),
            ));
        }
        for &(item_id, quantity) in entries {
            if quantity < 1 {
                return Err(RepositoryError::Validation(format!(
                    "quantity for item {item_id} must be at least 1"
                )));
            }
        }

        let mut tx = self.pool.begin().await?;

        let order_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO orders (customer_id, placed_at, payment_ref)
            VALUES (?1, ?2, ?3)
            RETURNING id
            ",
        )
        .bind(customer_id)
        .bind(Utc::now())
        .bind(payment_ref)
        .fetch_one(&mut *tx)
        .await?;

        for &(item_id, quantity) in entries {
            let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM menu_items WHERE id = ?1")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await?;

            if exists.is_none() {
                // Dropping the transaction rolls back the order row and any
                // line items already inserted.
                return Err(RepositoryError::Validation(format!(
                    "item {item_id} is not on the menu"
                )));
            }

            sqlx::query(
                r"
                INSERT INTO order_items (order_id, item_id, quantity)
                VALUES (?1, ?2, ?3)
                ",
            )
            .bind(order_id)
            .bind(item_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(%customer_id, order_id, lines = entries.len(), "checkout committed");
        Ok(OrderId::new(order_id))
    }

    /// Place a brand-new order replaying a past order's line items.
    ///
    /// The new order gets a fresh timestamp and a `reorder:<source id>`
    /// payment-reference marker. The atomicity guarantee of [`Self::checkout`]
    /// carries over: if any source item no longer resolves in the catalog,
    /// the whole reorder fails instead of silently dropping lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the source order does not exist
    /// or belongs to another customer.
    /// Returns `RepositoryError::Validation` if a source item is no longer on
    /// the menu.
    /// Returns `RepositoryError::Database` if the transaction fails.
    pub async fn reorder(
        &self,
        customer_id: CustomerId,
        source_order_id: OrderId,
    ) -> Result<OrderId, RepositoryError> {
        let source = self
            .get(customer_id, source_order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let entries: Vec<(ItemId, i64)> = source
            .items
            .iter()
            .map(|line| (line.item_id, line.quantity))
            .collect();

        let marker = format!("reorder:{source_order_id}");
        self.checkout(customer_id, &entries, Some(&marker)).await
    }

    /// Get one of a customer's orders with its line items.
    ///
    /// Returns `None` when the order does not exist or belongs to a different
    /// customer; the two cases are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, placed_at, payment_ref
            FROM orders
            WHERE id = ?1 AND customer_id = ?2
            ",
        )
        .bind(order_id)
        .bind(customer_id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT id, order_id, item_id, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(OrderWithItems {
            order: row.into(),
            items: items.into_iter().map(Into::into).collect(),
        }))
    }

    /// A customer's order history, newest first.
    ///
    /// Ordered by timestamp descending with id descending as tie-break, so
    /// the sequence is deterministic for a fixed state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn history(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, placed_at, payment_ref
            FROM orders
            WHERE customer_id = ?1
            ORDER BY placed_at DESC, id DESC
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        let items = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT oi.id, oi.order_id, oi.item_id, oi.quantity
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            WHERE o.customer_id = ?1
            ORDER BY oi.id ASC
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(group_items(orders, items))
    }

    /// All orders across all customers (admin view), in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn all_orders(&self) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_id, placed_at, payment_ref
            FROM orders
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let items = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT id, order_id, item_id, quantity
            FROM order_items
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(group_items(orders, items))
    }
}

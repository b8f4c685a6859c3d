//! Read-only reporting: joins across catalog, ledger, and reviews.
//!
//! No write side effects. Every join from historical rows to `menu_items` is
//! a LEFT JOIN that degrades to [`REMOVED_ITEM_PLACEHOLDER`] when the item
//! has since been deleted, so queries over old orders and reviews never fail
//! on a dangling reference.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use cafe_central_core::{CustomerId, ItemId, OrderId, Phone};

use super::RepositoryError;
use crate::models::{Customer, ItemRatingRow, OrderLine, OrderSummary};

/// Display name substituted for a menu item that no longer exists.
pub const REMOVED_ITEM_PLACEHOLDER: &str = "[removed item]";

#[derive(sqlx::FromRow)]
struct OrderLineRow {
    order_id: i64,
    placed_at: DateTime<Utc>,
    payment_ref: Option<String>,
    item_id: i64,
    item_name: String,
    quantity: i64,
}

/// Fold flat order/line rows into per-order summaries, preserving row order.
fn group_lines(rows: Vec<OrderLineRow>) -> Vec<OrderSummary> {
    let mut summaries: Vec<OrderSummary> = Vec::new();

    for row in rows {
        let order_id = OrderId::new(row.order_id);
        let line = OrderLine {
            item_id: ItemId::new(row.item_id),
            item_name: row.item_name,
            quantity: row.quantity,
        };

        match summaries.last_mut() {
            Some(last) if last.order_id == order_id => last.lines.push(line),
            _ => summaries.push(OrderSummary {
                order_id,
                placed_at: row.placed_at,
                payment_ref: row.payment_ref,
                lines: vec![line],
            }),
        }
    }

    summaries
}

/// Repository for read-only reporting queries.
pub struct ReportRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReportRepository<'a> {
    /// Create a new report repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// A customer's order history with item names resolved, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn order_history(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT o.id AS order_id, o.placed_at, o.payment_ref,
                   oi.item_id, COALESCE(m.name, ?2) AS item_name, oi.quantity
            FROM orders o
            JOIN order_items oi ON oi.order_id = o.id
            LEFT JOIN menu_items m ON m.id = oi.item_id
            WHERE o.customer_id = ?1
            ORDER BY o.placed_at DESC, o.id DESC, oi.id ASC
            ",
        )
        .bind(customer_id)
        .bind(REMOVED_ITEM_PLACEHOLDER)
        .fetch_all(self.pool)
        .await?;

        Ok(group_lines(rows))
    }

    /// All orders with item names resolved (admin view), in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all_orders(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT o.id AS order_id, o.placed_at, o.payment_ref,
                   oi.item_id, COALESCE(m.name, ?1) AS item_name, oi.quantity
            FROM orders o
            JOIN order_items oi ON oi.order_id = o.id
            LEFT JOIN menu_items m ON m.id = oi.item_id
            ORDER BY o.id ASC, oi.id ASC
            ",
        )
        .bind(REMOVED_ITEM_PLACEHOLDER)
        .fetch_all(self.pool)
        .await?;

        Ok(group_lines(rows))
    }

    /// Per-item rating aggregates with item names (admin view), in item id
    /// order.
    ///
    /// The mean keeps full precision here; rounding is left to the caller's
    /// display layer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn rating_report(&self) -> Result<Vec<ItemRatingRow>, RepositoryError> {
        let rows: Vec<(i64, String, f64, i64)> = sqlx::query_as(
            r"
            SELECT r.item_id, COALESCE(m.name, ?1) AS item_name,
                   AVG(r.rating) AS mean, COUNT(r.id) AS rating_count
            FROM reviews r
            LEFT JOIN menu_items m ON m.id = r.item_id
            GROUP BY r.item_id
            ORDER BY r.item_id ASC
            ",
        )
        .bind(REMOVED_ITEM_PLACEHOLDER)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(item_id, item_name, mean, rating_count)| ItemRatingRow {
                item_id: ItemId::new(item_id),
                item_name,
                mean,
                rating_count,
            })
            .collect())
    }

    /// All registered customers (admin view), in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored phone is
    /// invalid.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows: Vec<(i64, String, String)> = sqlx::query_as(
            r"
            SELECT id, name, phone
            FROM customers
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, name, phone)| {
                let phone = Phone::parse(&phone).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid phone in database: {e}"))
                })?;
                Ok(Customer {
                    id: CustomerId::new(id),
                    name,
                    phone,
                })
            })
            .collect()
    }
}

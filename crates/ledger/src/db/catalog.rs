//! Catalog repository: admin-managed menu items.
//!
//! Customers read the catalog; only admin operations write it. Deleting an
//! item that historical order lines or reviews reference succeeds - readers
//! of those rows degrade to a placeholder display instead of failing.

use sqlx::SqlitePool;

use cafe_central_core::{ItemId, Price};

use super::RepositoryError;
use crate::models::MenuItem;

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    price: String,
}

impl MenuItemRow {
    fn into_item(self) -> Result<MenuItem, RepositoryError> {
        let price = Price::parse(&self.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(MenuItem {
            id: ItemId::new(self.id),
            name: self.name,
            price,
        })
    }
}

fn validated_name(name: &str) -> Result<&str, RepositoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RepositoryError::Validation(
            "item name cannot be empty".to_owned(),
        ));
    }
    Ok(trimmed)
}

/// Repository for menu item database operations.
pub struct CatalogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a menu item.
    ///
    /// A positive price is guaranteed by [`Price`]; the name must be
    /// non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the name is blank.
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_item(&self, name: &str, price: Price) -> Result<MenuItem, RepositoryError> {
        let name = validated_name(name)?;

        let row = sqlx::query_as::<_, MenuItemRow>(
            r"
            INSERT INTO menu_items (name, price)
            VALUES (?1, ?2)
            RETURNING id, name, price
            ",
        )
        .bind(name)
        .bind(price.to_string())
        .fetch_one(self.pool)
        .await?;

        row.into_item()
    }

    /// Partially update a menu item.
    ///
    /// A field passed as `None` is left unchanged. Both field updates run in
    /// one transaction, so a concurrent reader never sees the name changed
    /// but not the price (or vice versa).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` if the new name is blank.
    /// Returns `RepositoryError::NotFound` if the item does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_item(
        &self,
        id: ItemId,
        name: Option<&str>,
        price: Option<Price>,
    ) -> Result<MenuItem, RepositoryError> {
        let name = name.map(validated_name).transpose()?;

        let mut tx = self.pool.begin().await?;

        if let Some(name) = name {
            sqlx::query("UPDATE menu_items SET name = ?1 WHERE id = ?2")
                .bind(name)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(price) = price {
            sqlx::query("UPDATE menu_items SET price = ?1 WHERE id = ?2")
                .bind(price.to_string())
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        // Also covers the missing-id case for a no-field update.
        let row = sqlx::query_as::<_, MenuItemRow>(
            r"
            SELECT id, name, price
            FROM menu_items
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await?;

        row.into_item()
    }

    /// Delete a menu item.
    ///
    /// Succeeds even when existing order lines or reviews reference the item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(item_id = %id, "menu item deleted");
        Ok(())
    }

    /// Get a menu item by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored price is
    /// invalid.
    pub async fn get_item(&self, id: ItemId) -> Result<Option<MenuItem>, RepositoryError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r"
            SELECT id, name, price
            FROM menu_items
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(MenuItemRow::into_item).transpose()
    }

    /// List all menu items in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is
    /// invalid.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r"
            SELECT id, name, price
            FROM menu_items
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(MenuItemRow::into_item).collect()
    }
}

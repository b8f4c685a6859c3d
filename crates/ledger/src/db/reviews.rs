//! Review aggregator: per-item ratings and derived averages.
//!
//! Reviews are immutable once submitted and never enforce "one per customer
//! per item" - the aggregate is recomputed over all reviews for an item. The
//! average is derived on demand and never persisted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use cafe_central_core::{CustomerId, ItemId, Rating, ReviewId};

use super::RepositoryError;
use crate::models::{RatingSummary, Review};

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    customer_id: i64,
    item_id: i64,
    rating: i64,
    comment: Option<String>,
    submitted_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Result<Review, RepositoryError> {
        let rating = Rating::new(self.rating).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid rating in database: {e}"))
        })?;

        Ok(Review {
            id: ReviewId::new(self.id),
            customer_id: CustomerId::new(self.customer_id),
            item_id: ItemId::new(self.item_id),
            rating,
            comment: self.comment,
            submitted_at: self.submitted_at,
        })
    }
}

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Submit a review for a menu item.
    ///
    /// The rating range is enforced by [`Rating`]; callers constructing one
    /// from raw input surface the range error as a validation failure.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item is not on the menu.
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn submit(
        &self,
        customer_id: CustomerId,
        item_id: ItemId,
        rating: Rating,
        comment: Option<&str>,
    ) -> Result<ReviewId, RepositoryError> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM menu_items WHERE id = ?1")
            .bind(item_id)
            .fetch_optional(self.pool)
            .await?;

        if exists.is_none() {
            return Err(RepositoryError::NotFound);
        }

        let review_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO reviews (customer_id, item_id, rating, comment, submitted_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            ",
        )
        .bind(customer_id)
        .bind(item_id)
        .bind(rating.as_i64())
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(ReviewId::new(review_id))
    }

    /// The mean rating and review count for one item.
    ///
    /// Returns `None` when the item has no reviews - "never rated" is
    /// distinct from "rated 0.0". The mean keeps full precision; use
    /// [`RatingSummary::display_mean`] for one-decimal display.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn average(
        &self,
        item_id: ItemId,
    ) -> Result<Option<RatingSummary>, RepositoryError> {
        let (mean, count): (Option<f64>, i64) = sqlx::query_as(
            r"
            SELECT AVG(rating), COUNT(*)
            FROM reviews
            WHERE item_id = ?1
            ",
        )
        .bind(item_id)
        .fetch_one(self.pool)
        .await?;

        match mean {
            Some(mean) if count > 0 => Ok(Some(RatingSummary { mean, count })),
            _ => Ok(None),
        }
    }

    /// Mean rating and review count for every reviewed item.
    ///
    /// Items with zero reviews are absent from the map.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn averages_all(&self) -> Result<HashMap<ItemId, RatingSummary>, RepositoryError> {
        let rows: Vec<(i64, f64, i64)> = sqlx::query_as(
            r"
            SELECT item_id, AVG(rating), COUNT(*)
            FROM reviews
            GROUP BY item_id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(item_id, mean, count)| (ItemId::new(item_id), RatingSummary { mean, count }))
            .collect())
    }

    /// All reviews for one item, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored rating is
    /// outside the valid range.
    pub async fn list_for_item(&self, item_id: ItemId) -> Result<Vec<Review>, RepositoryError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r"
            SELECT id, customer_id, item_id, rating, comment, submitted_at
            FROM reviews
            WHERE item_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(item_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }
}

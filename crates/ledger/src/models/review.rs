//! Review entity and derived rating aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cafe_central_core::{CustomerId, ItemId, Rating, ReviewId};

/// A single customer review of a menu item.
///
/// Immutable once submitted. A customer may review the same item any number
/// of times; the aggregate is recomputed over all of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Unique review id.
    pub id: ReviewId,
    /// The reviewing customer.
    pub customer_id: CustomerId,
    /// The reviewed menu item.
    pub item_id: ItemId,
    /// Star rating, 1-5.
    pub rating: Rating,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// When the review was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Derived mean and count of all ratings for one item.
///
/// Computed on demand, never persisted. The mean keeps full precision;
/// rounding to one decimal place is a display concern only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingSummary {
    /// Arithmetic mean of all rating values, full precision.
    pub mean: f64,
    /// Number of reviews aggregated.
    pub count: i64,
}

impl RatingSummary {
    /// The mean rounded to one decimal place, for display.
    #[must_use]
    pub fn display_mean(&self) -> f64 {
        (self.mean * 10.0).round() / 10.0
    }
}

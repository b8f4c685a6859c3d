//! Review rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum RatingError {
    /// The value is outside the 1-5 star range.
    #[error("rating must be between {min} and {max}", min = Rating::MIN, max = Rating::MAX)]
    OutOfRange,
}

/// A star rating between 1 and 5 inclusive.
///
/// ## Examples
///
/// ```
/// use cafe_central_core::Rating;
///
/// assert!(Rating::new(5).is_ok());
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i64);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: i64 = 1;
    /// Highest allowed rating.
    pub const MAX: i64 = 5;

    /// Create a `Rating` from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the value is not in `1..=5`.
    pub const fn new(value: i64) -> Result<Self, RatingError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(RatingError::OutOfRange);
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

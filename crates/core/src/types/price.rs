//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be positive")]
    NotPositive,
    /// The input string is not a valid decimal number.
    #[error("price is not a valid decimal: {0}")]
    InvalidDecimal(String),
}

/// A positive monetary amount.
///
/// Prices use [`Decimal`] arithmetic to avoid binary floating point rounding
/// in subtotals and totals. The currency is implicit (one currency per
/// deployment); the original system prices everything in a single local
/// currency and so does this core.
///
/// ## Constraints
///
/// - Strictly positive (a free or negatively priced menu item is rejected)
///
/// ## Examples
///
/// ```
/// use cafe_central_core::Price;
/// use rust_decimal::Decimal;
///
/// assert!(Price::new(Decimal::new(450, 2)).is_ok()); // 4.50
/// assert!(Price::new(Decimal::ZERO).is_err());
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if the amount is zero or negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Parse a `Price` from a decimal string such as `"4.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::InvalidDecimal`] if the string is not a decimal
    /// number, or [`PriceError::NotPositive`] if it is zero or negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s
            .trim()
            .parse()
            .map_err(|_| PriceError::InvalidDecimal(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_positive() {
        let price = Price::new(Decimal::new(450, 2)).unwrap();
        assert_eq!(price.amount(), Decimal::new(450, 2));
    }

    #[test]
    fn test_new_zero_rejected() {
        assert!(matches!(
            Price::new(Decimal::ZERO),
            Err(PriceError::NotPositive)
        ));
    }

    #[test]
    fn test_new_negative_rejected() {
        assert!(matches!(
            Price::new(Decimal::new(-100, 2)),
            Err(PriceError::NotPositive)
        ));
    }

    #[test]
    fn test_parse_valid() {
        let price = Price::parse("4.50").unwrap();
        assert_eq!(price.amount(), Decimal::new(450, 2));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(Price::parse(" 12.00 ").is_ok());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            Price::parse("four fifty"),
            Err(PriceError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let price = Price::parse("19.99").unwrap();
        assert_eq!(price.to_string(), "19.99");
        assert_eq!(price.to_string().parse::<Price>().unwrap(), price);
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::parse("4.5").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"4.5\"");
    }
}

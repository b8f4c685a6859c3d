//! Phone number type.
//!
//! The phone number is the unique contact key for a customer, so it gets the
//! same newtype treatment as any other identity-bearing string.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty after trimming.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that cannot appear in a phone number.
    #[error("phone number contains invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// A customer's phone number.
///
/// Validation is deliberately loose: digits plus the usual separators. The
/// number is stored exactly as entered (minus surrounding whitespace), and
/// uniqueness is enforced by the backing store, not by this type.
///
/// ## Examples
///
/// ```
/// use cafe_central_core::Phone;
///
/// assert!(Phone::parse("555-0100").is_ok());
/// assert!(Phone::parse("+91 98765 43210").is_ok());
///
/// assert!(Phone::parse("").is_err());
/// assert!(Phone::parse("not a number").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Maximum length of a phone number.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty after trimming
    /// - Is longer than 32 characters
    /// - Contains anything other than digits, spaces, `+`, `-`, `(`, or `)`
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = trimmed
            .chars()
            .find(|c| !c.is_ascii_digit() && !matches!(c, ' ' | '+' | '-' | '(' | ')'))
        {
            return Err(PhoneError::InvalidCharacter(c));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Type-safe price representation using decimal arithmetic.
//!
//! All storefront amounts are in USD, so a price is a bare decimal amount.
//! Using [`Decimal`] instead of a float keeps cart and order totals exact no
//! matter how many times quantities are changed.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
    /// The input is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A price in US dollars.
///
/// ## Examples
///
/// ```
/// use elegance_core::Price;
///
/// let price = Price::from_whole(189);
/// assert_eq!(price.to_string(), "$189.00");
/// assert_eq!((price * 2).to_string(), "$378.00");
/// assert_eq!("$19.5".parse::<Price>().unwrap().to_string(), "$19.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of dollars.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_whole(dollars: i64) -> Self {
        let magnitude = dollars.unsigned_abs();
        Self(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            dollars < 0,
            0,
        ))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Parse a price, accepting an optional leading `$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let amount =
            Decimal::from_str(digits).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_whole(249).to_string(), "$249.00");
        assert_eq!(Price::new(Decimal::new(1999, 2)).to_string(), "$19.99");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_from_whole_matches_decimal() {
        for dollars in [0, 1, 189, -42, 5_000_000_000, i64::MAX, i64::MIN] {
            assert_eq!(Price::from_whole(dollars).amount(), Decimal::from(dollars));
        }
    }

    #[test]
    fn test_sum_is_exact() {
        let dime = Price::new(Decimal::new(10, 2));
        let total: Price = std::iter::repeat_n(dime, 10).sum();
        assert_eq!(total, Price::from_whole(1));
    }

    #[test]
    fn test_mul_by_quantity() {
        assert_eq!(Price::from_whole(189) * 3, Price::from_whole(567));
        assert_eq!(Price::from_whole(189) * 0, Price::ZERO);
    }

    #[test]
    fn test_parse() {
        assert_eq!("200".parse::<Price>().unwrap(), Price::from_whole(200));
        assert_eq!("$300".parse::<Price>().unwrap(), Price::from_whole(300));
        assert!(matches!("abc".parse::<Price>(), Err(PriceError::Invalid(_))));
        assert_eq!("-5".parse::<Price>(), Err(PriceError::Negative));
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_whole(179) < Price::from_whole(189));
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_whole(229);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}

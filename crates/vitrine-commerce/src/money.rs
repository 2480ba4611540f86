//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation internally to avoid
//! floating-point precision issues, but serializes on the wire as a plain
//! decimal number (e.g. `197.0`), matching the storefront JSON format.
//! The storefront is single-currency, so no currency tag is carried.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A monetary value in the storefront's single currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// Get the decimal amount.
    pub fn to_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(self) -> bool {
        self.cents > 0
    }

    /// Add two amounts, returning `None` on overflow.
    pub fn try_add(self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(self, quantity: i64) -> Option<Money> {
        self.cents.checked_mul(quantity).map(Money::from_cents)
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn try_sum<'a>(amounts: impl Iterator<Item = &'a Money>) -> Option<Money> {
        let mut total = Money::zero();
        for amount in amounts {
            total = total.try_add(*amount)?;
        }
        Some(total)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount))
    }
}

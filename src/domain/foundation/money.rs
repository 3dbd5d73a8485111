//! Money value object held as whole cents.
//!
//! Estimates multiply per-page prices by half-page averages (15.5 pages for
//! the 11-20 bracket), so amounts are kept in integer cents and only turned
//! into currency units at the serialization boundary.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// Largest price a catalog may carry, in whole currency units.
///
/// At this ceiling the biggest estimate (per-page price times the largest
/// page bracket, plus base, SEO and features) stays far below `u64::MAX`
/// cents.
pub const MAX_PRICE_UNITS: u64 = 100_000_000;

/// A non-negative amount of money in the estimator's single currency.
///
/// Serializes as a plain JSON number in currency units: whole amounts as
/// integers (`3100`), fractional amounts with their cents (`10850.5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Largest amount a catalog price may hold.
    pub const MAX_PRICE: Self = Self(MAX_PRICE_UNITS * 100);

    /// Creates an amount from whole currency units.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Creates an amount from cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from a decimal number of currency units.
    ///
    /// Rounds to the nearest cent. Values above [`MAX_PRICE_UNITS`] are
    /// rejected.
    pub fn try_from_decimal(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("amount", "must be finite"));
        }
        if value < 0.0 {
            return Err(ValidationError::invalid_format("amount", "must not be negative"));
        }
        if value > MAX_PRICE_UNITS as f64 {
            return Err(ValidationError::out_of_range(
                "amount",
                0,
                MAX_PRICE_UNITS,
                value as u64,
            ));
        }
        Ok(Self((value * 100.0).round() as u64))
    }

    /// Checks that a catalog price does not exceed [`Money::MAX_PRICE`].
    pub fn ensure_price(&self, field: &str) -> Result<(), ValidationError> {
        if *self > Self::MAX_PRICE {
            return Err(ValidationError::out_of_range(
                field,
                0,
                MAX_PRICE_UNITS,
                self.0 / 100,
            ));
        }
        Ok(())
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in currency units.
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiplies the amount by the mean of `low` and `high`.
    ///
    /// The mean is not rounded; a half cent in the product rounds up.
    /// Saturates at `u64::MAX` cents instead of overflowing.
    pub fn times_mean(&self, low: u32, high: u32) -> Self {
        let doubled = self.0.saturating_mul(u64::from(low) + u64::from(high));
        Self(doubled.saturating_add(1) / 2)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    /// Formats as US-style currency: `$3,100` or `$10,850.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;

        let digits = units.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if cents == 0 {
            write!(f, "${}", grouped)
        } else {
            write!(f, "${}.{:02}", grouped, cents)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_units())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::try_from_decimal(value).map_err(de::Error::custom)
    }
}

//! # Money Module
//!
//! Provides the `Money` type for prices as they are stored: integer minor
//! units (cents).
//!
//! ## Where Money Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORAGE                 BOUNDARY                  ENGINE               │
//! │                                                                         │
//! │  item_prices.price ──► Money (i64 cents) ──► to_major() ──► f64 stats   │
//! │  399                   Money(399)             3.99          avg, %      │
//! │                                                                         │
//! │  User types "3.99" ──► Money::from_major(3.99) ──► Money(399) ──► DB    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage never sees a float. The engine works on `f64` major units because
//! averages and percentages are fractional anyway; the conversion happens
//! once, in [`crate::observation`].
//!
//! ## Usage
//! ```rust
//! use pricewise_core::money::Money;
//!
//! let milk = Money::from_cents(399); // $3.99
//! assert_eq!(milk.to_major(), 3.99);
//! assert_eq!(milk.to_string(), "$3.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the stored integer column
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as a bare integer**: matches the stored `price` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount typed by a user into cents.
    ///
    /// Rounds to the nearest cent, half away from zero. Non-finite input
    /// yields `None`; the boundary rejects it before it reaches storage.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(3.99), Some(Money::from_cents(399)));
    /// assert_eq!(Money::from_major(0.125), Some(Money::from_cents(13)));
    /// assert_eq!(Money::from_major(f64::NAN), None);
    /// ```
    pub fn from_major(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * MINOR_PER_MAJOR as f64).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units (dollars) for the engine.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250).to_major(), 2.5);
    /// ```
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Returns the whole major units (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit remainder (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly `$10.99` rendering. Reports use [`crate::format::CurrencyFormat`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_rounds_to_cent() {
        assert_eq!(Money::from_major(10.0), Some(Money::from_cents(1000)));
        assert_eq!(Money::from_major(2.5), Some(Money::from_cents(250)));
        // 1.005 is 1.00499999... in binary
        assert_eq!(Money::from_major(1.005), Some(Money::from_cents(100)));
        assert_eq!(Money::from_major(-1.5), Some(Money::from_cents(-150)));
    }

    #[test]
    fn test_from_major_rejects_non_finite() {
        assert_eq!(Money::from_major(f64::INFINITY), None);
        assert_eq!(Money::from_major(f64::NEG_INFINITY), None);
        assert_eq!(Money::from_major(f64::NAN), None);
        assert_eq!(Money::from_major(1e300), None);
    }

    #[test]
    fn test_to_major() {
        assert_eq!(Money::from_cents(399).to_major(), 3.99);
        assert_eq!(Money::from_cents(0).to_major(), 0.0);
        assert_eq!(Money::from_cents(-50).to_major(), -0.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(399)).unwrap();
        assert_eq!(json, "399");
    }
}

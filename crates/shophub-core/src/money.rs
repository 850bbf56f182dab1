//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    99.99 × 3 = 299.96999999999997  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    9999 cents × 3 = 29997 cents    ✅ exact                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shophub_core::money::Money;
//!
//! let price = Money::from_cents(29999); // $299.99
//! let doubled = price * 2;
//! assert_eq!(doubled.cents(), 59998);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use ts_rs::TS;

use crate::types::Quantity;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► CartItem.price_cents (snapshot) ──► line_total()
///                                                                 │
///                                  CartStore::total_price() ◄─────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    ///
    /// let price = Money::from_cents(7999); // Represents $79.99
    /// assert_eq!(price.cents(), 7999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    ///
    /// let total = Money::from_major_minor(190, 0);
    /// assert_eq!(total.cents(), 19000);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a cart line quantity, saturating at the
    /// bounds of `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::{Money, Quantity};
    ///
    /// let unit_price = Money::from_cents(7999);
    /// let qty = Quantity::new(2).unwrap();
    /// assert_eq!(unit_price.multiply_quantity(qty).cents(), 15998);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: Quantity) -> Self {
        Money(self.0.saturating_mul(qty.get() as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as "$299.99". The shell swaps the `$` for its configured
/// currency symbol.
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

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Multiplication by integer (for quantity calculations). Saturates.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        let money = Money::from_cents(29999);
        assert_eq!(money.cents(), 29999);
        assert_eq!(money.dollars(), 299);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(99, 99).cents(), 9999);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(29999)), "$299.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(9999);
        let qty = Quantity::new(5).unwrap();
        assert_eq!(unit_price.multiply_quantity(qty).cents(), 49995);
    }

    #[test]
    fn test_sum_of_lines() {
        // (2 × $50.00) + (3 × $30.00) = $190.00
        let lines = [Money::from_cents(5000) * 2, Money::from_cents(3000) * 3];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total, Money::from_major_minor(190, 0));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(10_000_000_000);
        let qty = Quantity::new(4_000_000_000).unwrap();
        assert_eq!(big.multiply_quantity(qty), Money::from_cents(i64::MAX));

        let half = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(half + half, Money::from_cents(i64::MAX));
        assert_eq!(Money::from_cents(-1) * i64::MAX * 2, Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }
}

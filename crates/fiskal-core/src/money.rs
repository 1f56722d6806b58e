//! # Money Module
//!
//! Provides the `Money` and `Quantity` types for handling monetary values
//! and item quantities safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A fiscalization backend rejects coupons whose sums drift by even      │
//! │  one minor unit, so every amount in this crate is an integer in the    │
//! │  smallest currency unit. Only a display layer ever formats decimals.   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fiskal_core::money::{Money, Quantity};
//!
//! // Create from minor units (the only way)
//! let price = Money::from_minor(150);
//!
//! // Line totals round half-up to the minor unit
//! let total = price.multiply_quantity(Quantity::from_units(3));
//! assert_eq!(total.minor(), 450);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refund coupons
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as a bare integer
///
/// Every amount on a coupon - unit prices, line totals, tax bases, tax
/// amounts, payments, discounts - flows through this type, so the arithmetic
/// the validator re-checks is the same arithmetic that produced the fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor currency units.
    ///
    /// ## Example
    /// ```rust
    /// use fiskal_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor currency units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit price by a quantity, rounding half-up to the
    /// minor unit.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF-UP, EXACTLY ONCE                                        │
    /// │                                                                     │
    /// │  Quantities are milli-units (1500 = 1.5), so a line total is       │
    /// │    price × qty_milli / 1000                                        │
    /// │  which may not be integral for weighed goods. The single rounding  │
    /// │  rule for the whole crate is round-half-up at the minor unit:      │
    /// │    (price × qty_milli + 500) / 1000    (sign-adjusted)             │
    /// │                                                                     │
    /// │  The validator re-applies the identical formula, so a coupon       │
    /// │  produced with it can never trip the line-total invariant from    │
    /// │  divergent rounding.                                               │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use fiskal_core::money::{Money, Quantity};
    ///
    /// // 1.5 kg at 99 per kg = 148.5 → 149
    /// let total = Money::from_minor(99).multiply_quantity(Quantity::from_milli(1500));
    /// assert_eq!(total.minor(), 149);
    /// ```
    pub fn multiply_quantity(&self, qty: Quantity) -> Money {
        // Use i128 to prevent overflow on large amounts
        let product = self.0 as i128 * qty.milli() as i128;
        // Round half-up toward +∞ for positive products, -∞ for negative,
        // so a sale and its mirroring refund round to the same magnitude
        let rounded = if product >= 0 {
            (product + 500) / 1000
        } else {
            (product - 500) / 1000
        };
        Money(rounded as i64)
    }

    /// Sums an iterator of Money values.
    ///
    /// ## Example
    /// ```rust
    /// use fiskal_core::money::Money;
    ///
    /// let amounts = [Money::from_minor(500), Money::from_minor(1000)];
    /// assert_eq!(Money::sum(amounts.iter().copied()).minor(), 1500);
    /// ```
    pub fn sum<I: IntoIterator<Item = Money>>(amounts: I) -> Money {
        amounts.into_iter().fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Quantity Type
// =============================================================================

/// An item quantity in milli-units (1000 = one piece, 1500 = 1.5 kg).
///
/// ## Why Milli-Units?
/// Weighed goods need fractional quantities, and floats are banned from
/// fiscal arithmetic. Fixed-point thousandths keep three decimals of
/// precision in plain integer math, the same trick the tax-rate
/// basis-point representation uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from whole units (pieces).
    ///
    /// ## Example
    /// ```rust
    /// use fiskal_core::money::Quantity;
    ///
    /// let three = Quantity::from_units(3);
    /// assert_eq!(three.milli(), 3000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity(units * 1000)
    }

    /// Creates a quantity from milli-units.
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Quantity(milli)
    }

    /// Returns the quantity in milli-units.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Checks if the quantity is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw minor-unit amount.
///
/// ## Note
/// This is for debugging and error messages. Currency formatting belongs
/// to the receipt-printing layer, which handles localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 1000 == 0 {
            write!(f, "{}", self.0 / 1000)
        } else {
            write!(f, "{}.{:03}", self.0 / 1000, (self.0 % 1000).abs())
        }
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (whole-unit quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Money Module
//!
//! Provides the `Money` type for storefront prices.
//!
//! ## Whole Units Only
//! Catalog prices are listed without a minor unit (`2799`, not `27.99`), so
//! `Money` wraps a plain integer count of whole currency units. There is no
//! tax, discount or rounding here: the storefront only ever displays prices
//! and sums them for the cart badge.
//!
//! ## Usage
//! ```rust
//! use shopflow_core::money::Money;
//!
//! let serum = Money::from_units(2799);
//! let oil = Money::from_units(3199);
//!
//! assert_eq!((serum + oil).units(), 5998);
//! assert_eq!(serum.to_string(), "2799");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► Product card label ("₹2799")
///                 │
///                 └──► CatalogState::cart_total() ──► Cart summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use shopflow_core::money::Money;
    ///
    /// let price = Money::from_units(5499);
    /// assert_eq!(price.units(), 5499);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Formats the amount behind a currency symbol.
    ///
    /// ```rust
    /// use shopflow_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(3499).format_with("₹"), "₹3499");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain number, no symbol. Renderers pick the symbol from config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
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

//! # Domain Types
//!
//! Core domain types used throughout ShopFlow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   ProductId     │   │    ImageRef     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  u32, stable    │   │  opaque asset   │       │
//! │  │  title          │   │  identity       │   │  handle, never  │       │
//! │  │  price (Money)  │   └─────────────────┘   │  interpreted    │       │
//! │  │  image_ref      │──────────────────────────►                 │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable values. They are declared once in the seed list
//! and never created, edited or removed while a session runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable identity of a catalog product.
///
/// Cart and favorites store ids, never product copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Image Ref
// =============================================================================

/// Opaque handle to a presentation asset.
///
/// The core only carries it through to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        ImageRef(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name. Also the key category filters match against.
    pub title: String,

    /// Price in whole currency units.
    pub price: Money,

    /// Asset shown on the product card and banner.
    pub image_ref: ImageRef,
}

impl Product {
    pub fn new(id: u32, title: impl Into<String>, price: i64, image_ref: impl Into<String>) -> Self {
        Product {
            id: ProductId::new(id),
            title: title.into(),
            price: Money::from_units(price),
            image_ref: ImageRef::new(image_ref),
        }
    }

    /// Case-insensitive substring test of `needle` against the title.
    ///
    /// ```rust
    /// use shopflow_core::Product;
    ///
    /// let product = Product::new(2, "Sup Lotion", 3299, "product_2");
    /// assert!(product.title_contains("lotion"));
    /// assert!(product.title_contains("SUP"));
    /// assert!(!product.title_contains("Skin"));
    /// ```
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new(7, "Sup Skin Night Cream", 4599, "product_1");
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.price.units(), 4599);
        assert_eq!(product.image_ref.as_str(), "product_1");
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let product = Product::new(1, "Sup Skin Glow Serum", 2799, "product_1");
        assert!(product.title_contains("skin"));
        assert!(product.title_contains("GLOW"));
        assert!(product.title_contains(""));
        assert!(!product.title_contains("Hair"));
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::from(12).to_string(), "12");
        assert_eq!(ProductId::new(3).get(), 3);
    }
}

//! # Seed Data
//!
//! The built-in storefront catalog and its category chips.
//!
//! Every title carries exactly one category keyword, so each chip other than
//! `"All"` narrows the list to a small, predictable set:
//!
//! ```text
//! Skin ─────► 1, 7        Fragrance ─► 4, 10
//! Hair ─────► 2, 8        Men ───────► 5, 11
//! Makeup ───► 3, 9        Tools ─────► 6
//! (none) ───► 12
//! ```

use crate::types::Product;
use crate::ALL_CATEGORY;

const PRODUCT_IMAGE_A: &str = "product_1";
const PRODUCT_IMAGE_B: &str = "product_2";

/// Returns the 12-product storefront catalog in display order.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Sup Skin Glow Serum", 2799, PRODUCT_IMAGE_A),
        Product::new(2, "Sup Hair Repair Oil", 3199, PRODUCT_IMAGE_B),
        Product::new(3, "Sup Makeup Primer", 3499, PRODUCT_IMAGE_A),
        Product::new(4, "Sup Fragrance Mist", 5499, PRODUCT_IMAGE_B),
        Product::new(5, "Sup Men Beard Balm", 2999, PRODUCT_IMAGE_A),
        Product::new(6, "Sup Tools Brush Set", 4299, PRODUCT_IMAGE_B),
        Product::new(7, "Sup Skin Night Cream", 4599, PRODUCT_IMAGE_A),
        Product::new(8, "Sup Hair Shine Spray", 3799, PRODUCT_IMAGE_B),
        Product::new(9, "Sup Makeup Setting Powder", 3999, PRODUCT_IMAGE_A),
        Product::new(10, "Sup Fragrance Eau de Parfum", 5299, PRODUCT_IMAGE_B),
        Product::new(11, "Sup Men Face Wash", 2899, PRODUCT_IMAGE_A),
        Product::new(12, "Sup Body Lotion", 3299, PRODUCT_IMAGE_B),
    ]
}

/// Returns the category chips in display order, `"All"` first.
pub fn default_categories() -> Vec<String> {
    [
        ALL_CATEGORY,
        "Skin",
        "Hair",
        "Makeup",
        "Fragrance",
        "Men",
        "Tools",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

//! # Catalog State
//!
//! The single source of truth for one storefront browsing session.
//!
//! ## Intents and Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CatalogState Operations                              │
//! │                                                                         │
//! │  Renderer Gesture         Intent                  State Change          │
//! │  ────────────────         ──────                  ────────────          │
//! │                                                                         │
//! │  Tap category chip ─────► select_category() ────► selected = c         │
//! │                                                                         │
//! │  Tap "Add to cart" ─────► toggle_cart() ────────► cart ^= {id}         │
//! │                                                                         │
//! │  Tap heart icon ────────► toggle_favorite() ────► favorites ^= {id}    │
//! │                                                                         │
//! │  Every render pass ─────► visible_products()      (read only)          │
//! │                           cart_count()                                  │
//! │                           favorite_count()                              │
//! │                           snapshot()                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `cart` and `favorites` only ever hold ids present in the catalog
//! - `selected_category` is always a member of the category enumeration
//! - the visible list depends on the catalog and the selected category only
//!
//! Category filtering is a case-insensitive substring scan over a catalog of
//! a dozen or so products. There is no search index.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::seed;
use crate::types::{Product, ProductId};
use crate::validation::{validate_catalog, validate_categories};
use crate::ALL_CATEGORY;

/// Result of a toggle intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
    /// Whether the product is in the set after the toggle.
    pub member: bool,
    /// Size of the set after the toggle.
    pub count: usize,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub selected_category: String,
    pub categories: Vec<String>,
    pub visible: Vec<Product>,
    /// Cart member ids in catalog order.
    pub cart: Vec<ProductId>,
    /// Favorite ids in catalog order.
    pub favorites: Vec<ProductId>,
    pub cart_count: usize,
    pub favorite_count: usize,
    pub cart_total: Money,
}

/// Browsing session state: catalog, category filter, cart and favorites.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    known: HashSet<ProductId>,
    categories: Vec<String>,
    selected_category: String,
    cart: HashSet<ProductId>,
    favorites: HashSet<ProductId>,
}

impl CatalogState {
    /// Creates a session over `products`, filterable by `categories`.
    ///
    /// ## Errors
    /// `CoreError::Validation` if the catalog has duplicate ids, blank titles
    /// or non-positive prices, or if the categories are blank, duplicated or
    /// lack `"All"`.
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> CoreResult<Self> {
        validate_catalog(&products)?;
        validate_categories(&categories)?;
        Ok(Self::build(products, categories))
    }

    /// Creates a session over the built-in seed catalog and categories.
    pub fn with_defaults() -> Self {
        Self::build(seed::default_catalog(), seed::default_categories())
    }

    fn build(products: Vec<Product>, categories: Vec<String>) -> Self {
        let known = products.iter().map(|p| p.id).collect();
        CatalogState {
            products,
            known,
            categories,
            selected_category: ALL_CATEGORY.to_string(),
            cart: HashSet::new(),
            favorites: HashSet::new(),
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Selects the category filter and returns the resulting visible list.
    ///
    /// Re-selecting the current category succeeds and changes nothing.
    ///
    /// ## Errors
    /// `CoreError::InvalidCategory` if `category` is not in the enumeration.
    /// The current selection is kept.
    pub fn select_category(&mut self, category: &str) -> CoreResult<Vec<&Product>> {
        if !self.categories.iter().any(|c| c == category) {
            return Err(CoreError::InvalidCategory(category.to_string()));
        }

        self.selected_category = category.to_string();
        Ok(self.visible_products())
    }

    /// Adds the product to the cart, or removes it if already there.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` if `id` is not in the catalog. The cart is
    /// left untouched.
    pub fn toggle_cart(&mut self, id: ProductId) -> CoreResult<Toggle> {
        self.ensure_known(id)?;
        Ok(toggle(&mut self.cart, id))
    }

    /// Marks the product as a favorite, or unmarks it if already marked.
    ///
    /// Independent of the cart.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` if `id` is not in the catalog.
    pub fn toggle_favorite(&mut self, id: ProductId) -> CoreResult<Toggle> {
        self.ensure_known(id)?;
        Ok(toggle(&mut self.favorites, id))
    }

    fn ensure_known(&self, id: ProductId) -> CoreResult<()> {
        if self.known.contains(&id) {
            Ok(())
        } else {
            Err(CoreError::UnknownProduct(id))
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Products matching the selected category, in catalog order.
    ///
    /// `"All"` matches everything. Any other category matches titles that
    /// contain it, ignoring case. An empty result is a normal outcome.
    pub fn visible_products(&self) -> Vec<&Product> {
        let category = self.selected_category.as_str();
        self.products
            .iter()
            .filter(|p| category == ALL_CATEGORY || p.title_contains(category))
            .collect()
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Cart membership. Unknown ids are simply not in the cart.
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(&id)
    }

    /// Favorite membership. Unknown ids are simply not favorites.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Cart contents in catalog order.
    pub fn cart_products(&self) -> Vec<&Product> {
        self.members(&self.cart)
    }

    /// Favorites in catalog order.
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.members(&self.favorites)
    }

    /// Sum of the prices of everything in the cart.
    pub fn cart_total(&self) -> Money {
        self.cart_products().into_iter().map(|p| p.price).sum()
    }

    /// Captures the current derived views as one owned value.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            selected_category: self.selected_category.clone(),
            categories: self.categories.clone(),
            visible: self.visible_products().into_iter().cloned().collect(),
            cart: self.cart_products().iter().map(|p| p.id).collect(),
            favorites: self.favorite_products().iter().map(|p| p.id).collect(),
            cart_count: self.cart_count(),
            favorite_count: self.favorite_count(),
            cart_total: self.cart_total(),
        }
    }

    fn members(&self, set: &HashSet<ProductId>) -> Vec<&Product> {
        self.products.iter().filter(|p| set.contains(&p.id)).collect()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn toggle(set: &mut HashSet<ProductId>, id: ProductId) -> Toggle {
    // `remove` is true when the id was present.
    let member = !set.remove(&id);
    if member {
        set.insert(id);
    }
    Toggle {
        member,
        count: set.len(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    fn two_product_session() -> CatalogState {
        CatalogState::new(
            vec![
                Product::new(1, "Sup Skin", 2799, "product_1"),
                Product::new(2, "Sup Lotion", 3299, "product_2"),
            ],
            vec!["All".to_string(), "Skin".to_string(), "Lotion".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_start_unfiltered_and_empty() {
        let catalog = CatalogState::with_defaults();
        assert_eq!(catalog.selected_category(), "All");
        assert_eq!(catalog.visible_products().len(), 12);
        assert_eq!(catalog.cart_count(), 0);
        assert_eq!(catalog.favorite_count(), 0);
        assert!(catalog.cart_total().is_zero());
    }

    #[test]
    fn test_new_rejects_invalid_seed() {
        let err = CatalogState::new(
            vec![Product::new(1, "Sup Skin", 2799, "product_1")],
            vec!["Skin".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_lotion_scenario() {
        let mut catalog = two_product_session();

        let visible = catalog.select_category("Lotion").unwrap();
        assert_eq!(ids(&visible), vec![2]);

        let added = catalog.toggle_cart(ProductId::new(2)).unwrap();
        assert_eq!(added, Toggle { member: true, count: 1 });
        assert!(catalog.is_in_cart(ProductId::new(2)));
        assert_eq!(catalog.cart_count(), 1);

        let removed = catalog.toggle_cart(ProductId::new(2)).unwrap();
        assert_eq!(removed, Toggle { member: false, count: 0 });
        assert!(!catalog.is_in_cart(ProductId::new(2)));
        assert_eq!(catalog.cart_count(), 0);
    }

    #[test]
    fn test_every_category_filters_by_title() {
        let mut catalog = CatalogState::with_defaults();
        let categories = catalog.categories().to_vec();

        for category in &categories {
            let visible = ids(&catalog.select_category(category).unwrap());
            let expected: Vec<u32> = catalog
                .products()
                .iter()
                .filter(|p| category == "All" || p.title_contains(category))
                .map(|p| p.id.get())
                .collect();
            assert_eq!(visible, expected, "category {}", category);
        }
    }

    #[test]
    fn test_category_match_ignores_case() {
        let mut catalog = CatalogState::new(
            vec![
                Product::new(1, "SKIN tonic", 2799, "product_1"),
                Product::new(2, "sup skinny", 2899, "product_2"),
                Product::new(3, "Hair oil", 2999, "product_1"),
            ],
            vec!["All".to_string(), "Skin".to_string()],
        )
        .unwrap();

        assert_eq!(ids(&catalog.select_category("Skin").unwrap()), vec![1, 2]);
    }

    #[test]
    fn test_select_all_restores_seed_order() {
        let mut catalog = CatalogState::with_defaults();
        catalog.select_category("Hair").unwrap();
        catalog.select_category("Tools").unwrap();

        let visible = ids(&catalog.select_category("All").unwrap());
        assert_eq!(visible, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_select_same_category_is_idempotent() {
        let mut catalog = CatalogState::with_defaults();
        let first = ids(&catalog.select_category("Men").unwrap());
        let second = ids(&catalog.select_category("Men").unwrap());
        assert_eq!(first, vec![5, 11]);
        assert_eq!(first, second);
        assert_eq!(catalog.selected_category(), "Men");
    }

    #[test]
    fn test_invalid_category_keeps_selection() {
        let mut catalog = CatalogState::with_defaults();
        catalog.select_category("Skin").unwrap();

        let err = catalog.select_category("Shoes").unwrap_err();
        assert_eq!(err, CoreError::InvalidCategory("Shoes".to_string()));
        assert_eq!(catalog.selected_category(), "Skin");

        // Enumeration membership is exact, filtering is not.
        assert!(catalog.select_category("skin").is_err());
    }

    #[test]
    fn test_category_with_no_matches_is_empty() {
        let mut catalog = CatalogState::new(
            vec![Product::new(1, "Sup Skin", 2799, "product_1")],
            vec!["All".to_string(), "Tools".to_string()],
        )
        .unwrap();

        assert!(catalog.select_category("Tools").unwrap().is_empty());
        assert!(catalog.visible_products().is_empty());
    }

    #[test]
    fn test_toggle_cart_is_involution() {
        let mut catalog = CatalogState::with_defaults();
        let id = ProductId::new(4);
        catalog.toggle_cart(ProductId::new(1)).unwrap();

        let before = catalog.is_in_cart(id);
        catalog.toggle_cart(id).unwrap();
        catalog.toggle_cart(id).unwrap();
        assert_eq!(catalog.is_in_cart(id), before);
        assert_eq!(catalog.cart_count(), 1);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut catalog = CatalogState::with_defaults();
        catalog.toggle_cart(ProductId::new(3)).unwrap();

        let err = catalog.toggle_cart(ProductId::new(99)).unwrap_err();
        assert_eq!(err, CoreError::UnknownProduct(ProductId::new(99)));
        assert_eq!(catalog.cart_count(), 1);
        assert!(catalog.is_in_cart(ProductId::new(3)));

        assert!(catalog.toggle_favorite(ProductId::new(0)).is_err());
        assert_eq!(catalog.favorite_count(), 0);
    }

    #[test]
    fn test_membership_queries_never_fail_for_unknown_ids() {
        let catalog = CatalogState::with_defaults();
        assert!(!catalog.is_in_cart(ProductId::new(404)));
        assert!(!catalog.is_favorite(ProductId::new(404)));
        assert!(catalog.product(ProductId::new(404)).is_none());
    }

    #[test]
    fn test_cart_and_favorites_are_independent() {
        let mut catalog = CatalogState::with_defaults();
        let id = ProductId::new(6);
        catalog.toggle_cart(id).unwrap();

        let favorite = catalog.toggle_favorite(id).unwrap();
        assert!(favorite.member);
        assert!(catalog.is_in_cart(id));
        assert_eq!(catalog.cart_count(), 1);

        catalog.toggle_favorite(id).unwrap();
        assert!(catalog.is_in_cart(id));
        assert_eq!(catalog.cart_count(), 1);
        assert!(!catalog.is_favorite(id));

        catalog.toggle_cart(id).unwrap();
        catalog.toggle_favorite(ProductId::new(2)).unwrap();
        assert_eq!(catalog.favorite_count(), 1);
        assert_eq!(catalog.cart_count(), 0);
    }

    #[test]
    fn test_counts_match_membership() {
        let mut catalog = CatalogState::with_defaults();
        for id in [1, 3, 5, 3, 8, 12, 1] {
            catalog.toggle_cart(ProductId::new(id)).unwrap();
        }
        for id in [2, 2, 9] {
            catalog.toggle_favorite(ProductId::new(id)).unwrap();
        }

        let in_cart = catalog.products().iter().filter(|p| catalog.is_in_cart(p.id)).count();
        let favorites = catalog.products().iter().filter(|p| catalog.is_favorite(p.id)).count();
        assert_eq!(catalog.cart_count(), in_cart);
        assert_eq!(catalog.cart_count(), 3);
        assert_eq!(catalog.favorite_count(), favorites);
        assert_eq!(catalog.favorite_count(), 1);
    }

    #[test]
    fn test_cart_products_follow_catalog_order() {
        let mut catalog = CatalogState::with_defaults();
        for id in [9, 2, 5] {
            catalog.toggle_cart(ProductId::new(id)).unwrap();
        }

        assert_eq!(ids(&catalog.cart_products()), vec![2, 5, 9]);
        assert_eq!(catalog.cart_total().units(), 3199 + 2999 + 3999);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut catalog = CatalogState::with_defaults();
        catalog.select_category("Fragrance").unwrap();
        catalog.toggle_cart(ProductId::new(10)).unwrap();
        catalog.toggle_favorite(ProductId::new(1)).unwrap();

        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.selected_category, "Fragrance");
        assert_eq!(
            snapshot.visible.iter().map(|p| p.id.get()).collect::<Vec<_>>(),
            vec![4, 10]
        );
        assert_eq!(snapshot.cart, vec![ProductId::new(10)]);
        assert_eq!(snapshot.favorites, vec![ProductId::new(1)]);
        assert_eq!(snapshot.cart_count, 1);
        assert_eq!(snapshot.favorite_count, 1);
        assert_eq!(snapshot.cart_total, Money::from_units(5299));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["selectedCategory"], "Fragrance");
        assert_eq!(json["cartCount"], 1);
    }
}

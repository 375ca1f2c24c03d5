//! # Product Commands
//!
//! Listing, category selection and product detail.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [All] [Skin] [Hair] [Makeup] [Fragrance] [Men] [Tools]   ◄── chips    │
//! │                                                                         │
//! │  ✨ Trending Now                                                        │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Sup Hair Repair Oil        ₹3199      ♥     [Add to cart]     │    │
//! │  │  Sup Hair Shine Spray       ₹3799      ♡     [Add to cart]     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  tap chip ──► select_category("Hair") ──► ProductsResponse              │
//! │  tap card ──► view_product(id) ─────────► "Viewing {title}"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopflow_core::{CatalogState, CoreError, Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::notify;
use crate::state::{ConfigState, SessionState};

/// A product as one card in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    /// Price with currency symbol, e.g. "₹2799"
    pub price_label: String,
    pub image_ref: String,
    pub in_cart: bool,
    /// Drives the heart icon tint
    pub favorite: bool,
}

impl ProductCard {
    pub fn new(product: &Product, catalog: &CatalogState, config: &ConfigState) -> Self {
        ProductCard {
            id: product.id,
            title: product.title.clone(),
            price_label: config.format_price(product.price),
            image_ref: product.image_ref.as_str().to_string(),
            in_cart: catalog.is_in_cart(product.id),
            favorite: catalog.is_favorite(product.id),
        }
    }
}

/// Visible list under the current category chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub selected_category: String,
    pub categories: Vec<String>,
    pub products: Vec<ProductCard>,
}

impl ProductsResponse {
    fn from_catalog(catalog: &CatalogState, config: &ConfigState) -> Self {
        ProductsResponse {
            selected_category: catalog.selected_category().to_string(),
            categories: catalog.categories().to_vec(),
            products: catalog
                .visible_products()
                .into_iter()
                .map(|p| ProductCard::new(p, catalog, config))
                .collect(),
        }
    }
}

/// Reply to tapping a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub product: ProductCard,
    pub message: String,
}

/// Gets the products visible under the current category.
pub fn get_products(session: &SessionState, config: &ConfigState) -> ProductsResponse {
    debug!("get_products command");
    session.with_catalog(|c| ProductsResponse::from_catalog(c, config))
}

/// Selects a category chip.
///
/// ## Returns
/// The filtered list. An empty list is a normal outcome.
pub fn select_category(
    session: &SessionState,
    config: &ConfigState,
    category: &str,
) -> Result<ProductsResponse, ApiError> {
    debug!(category = %category, "select_category command");

    session.with_catalog_mut(|c| -> Result<ProductsResponse, ApiError> {
        c.select_category(category)?;
        Ok(ProductsResponse::from_catalog(c, config))
    })
}

/// Opens a product card.
pub fn view_product(
    session: &SessionState,
    config: &ConfigState,
    id: ProductId,
) -> Result<ViewResponse, ApiError> {
    debug!(product_id = %id, "view_product command");

    session.with_catalog(|c| -> Result<ViewResponse, ApiError> {
        let product = c.product(id).ok_or(CoreError::UnknownProduct(id))?;
        Ok(ViewResponse {
            message: notify::viewing(&product.title),
            product: ProductCard::new(product, c, config),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (SessionState, ConfigState) {
        let config = ConfigState::default();
        let session = SessionState::new(&config).unwrap();
        (session, config)
    }

    #[test]
    fn test_get_products_lists_everything_by_default() {
        let (session, config) = setup();
        let response = get_products(&session, &config);

        assert_eq!(response.selected_category, "All");
        assert_eq!(response.products.len(), 12);
        assert_eq!(response.products[0].price_label, "₹2799");
        assert!(response.products.iter().all(|p| !p.in_cart && !p.favorite));
    }

    #[test]
    fn test_select_category_filters() {
        let (session, config) = setup();
        let response = select_category(&session, &config, "Makeup").unwrap();

        let ids: Vec<u32> = response.products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 9]);
        assert_eq!(get_products(&session, &config).selected_category, "Makeup");
    }

    #[test]
    fn test_select_unknown_category() {
        let (session, config) = setup();
        let err = select_category(&session, &config, "Shoes").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCategory);
        assert_eq!(get_products(&session, &config).selected_category, "All");
    }

    #[test]
    fn test_view_product() {
        let (session, config) = setup();
        let response = view_product(&session, &config, ProductId::new(12)).unwrap();
        assert_eq!(response.message, "Viewing Sup Body Lotion");

        let err = view_product(&session, &config, ProductId::new(13)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownProduct);
    }
}

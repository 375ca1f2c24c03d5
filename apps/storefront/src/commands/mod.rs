//! # Commands Module
//!
//! Everything a renderer can ask of the storefront session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (shared reply types)
//! ├── product.rs    ◄─── Listing, category chips, product detail
//! ├── cart.rs       ◄─── Add / toggle / summarize the cart
//! ├── favorites.rs  ◄─── Toggle / summarize favorites
//! ├── search.rs     ◄─── Top-bar search icon
//! └── banner.rs     ◄─── Banner auto-advance
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Gesture                                                                │
//! │  ───────                                                                │
//! │  "add 3"                                                                │
//! │     │                                                                   │
//! │     │ (driver::Command::from_str)                                       │
//! │     ▼                                                                   │
//! │  fn add_to_cart(                                                        │
//! │      session: &SessionState,   ◄── the one screen session              │
//! │      id: ProductId,            ◄── from the gesture                    │
//! │  ) -> Result<IntentResponse, ApiError>                                  │
//! │     │                                                                   │
//! │     │ (JSON serialization)                                              │
//! │     ▼                                                                   │
//! │  Renderer receives: { member, count, badge, message }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod banner;
pub mod cart;
pub mod favorites;
pub mod product;
pub mod search;

use serde::Serialize;
use shopflow_core::{CatalogState, CoreError, ProductId, Toggle};

use crate::notify;

/// Reply to a cart or favorites gesture on one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    pub product_id: ProductId,
    /// Membership after the gesture
    pub member: bool,
    /// Set size after the gesture
    pub count: usize,
    /// Icon badge text, absent while empty
    pub badge: Option<String>,
    /// Snackbar text, absent when nothing changed
    pub message: Option<String>,
}

impl IntentResponse {
    fn new(product_id: ProductId, toggle: Toggle, message: Option<String>) -> Self {
        IntentResponse {
            product_id,
            member: toggle.member,
            count: toggle.count,
            badge: notify::badge(toggle.count),
            message,
        }
    }
}

/// Title lookup that fails the same way the intents do.
fn title_of(catalog: &CatalogState, id: ProductId) -> Result<String, CoreError> {
    catalog
        .product(id)
        .map(|p| p.title.clone())
        .ok_or(CoreError::UnknownProduct(id))
}

/// Reply to tapping the cart or favorites icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub count: usize,
    pub badge: Option<String>,
    /// Members in catalog order
    pub products: Vec<product::ProductCard>,
    /// Price total, cart only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_label: Option<String>,
    pub message: String,
}

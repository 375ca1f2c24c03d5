//! # shopflow-core: Pure Session Logic for ShopFlow
//!
//! This crate is the behavioral core of the ShopFlow storefront screen. It
//! owns the catalog browsing session as plain data with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopFlow Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Renderer (any UI toolkit)                    │   │
//! │  │    Banner ──► Category chips ──► Product cards ──► Badges       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents / snapshots                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront app (commands)                       │   │
//! │  │    select_category, add_to_cart, toggle_favorite, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopflow-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │ carousel  │  │ validation│  │   │
//! │  │   │  Product  │  │ Catalog-  │  │ next_index│  │   seed    │  │   │
//! │  │   │ ProductId │  │   State   │  │  Banner   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO RENDERING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, ImageRef)
//! - [`money`] - Whole-unit price type
//! - [`catalog`] - The session state and its intents
//! - [`carousel`] - Banner auto-advance index math
//! - [`seed`] - Built-in catalog and category list
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time checks on seed data
//!
//! ## Example Usage
//!
//! ```rust
//! use shopflow_core::{CatalogState, ProductId};
//!
//! let mut catalog = CatalogState::with_defaults();
//!
//! let visible = catalog.select_category("Hair").unwrap();
//! assert!(visible.iter().all(|p| p.title.contains("Hair")));
//!
//! let toggle = catalog.toggle_cart(ProductId::new(2)).unwrap();
//! assert!(toggle.member);
//! assert_eq!(catalog.cart_count(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod money;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use carousel::{next_index, BannerCarousel};
pub use catalog::{CatalogSnapshot, CatalogState, Toggle};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The category sentinel that disables filtering.
pub const ALL_CATEGORY: &str = "All";

/// Number of leading catalog products shown in the banner carousel.
pub const BANNER_SIZE: usize = 6;

/// Delay between banner auto-advances, in milliseconds.
pub const BANNER_INTERVAL_MS: u64 = 2500;

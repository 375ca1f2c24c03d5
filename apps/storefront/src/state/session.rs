//! # Session State
//!
//! One storefront screen session: created on screen entry, dropped on exit.
//!
//! ## Thread Safety
//! The stdin handler and the banner ticker both reach into the session, so
//! the catalog and the banner each sit behind `Arc<Mutex<T>>`. Every access
//! goes through a closure, which keeps lock scopes short and out of awaits.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use shopflow_core::{seed, BannerCarousel, CatalogState, CoreResult, Product};
use uuid::Uuid;

use super::ConfigState;

#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Arc<Mutex<CatalogState>>,
    banner: Arc<Mutex<BannerCarousel>>,
}

impl SessionState {
    /// Starts a session over the built-in catalog with the configured chips.
    pub fn new(config: &ConfigState) -> CoreResult<Self> {
        Self::with_products(seed::default_catalog(), config)
    }

    /// Starts a session over an explicit catalog.
    ///
    /// The banner covers the first `banner_size` products, or fewer when the
    /// catalog is shorter.
    pub fn with_products(products: Vec<Product>, config: &ConfigState) -> CoreResult<Self> {
        let catalog = CatalogState::new(products, config.categories.clone())?;
        let banner = BannerCarousel::new(config.banner_size.min(catalog.products().len()));

        Ok(SessionState {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalog: Arc::new(Mutex::new(catalog)),
            banner: Arc::new(Mutex::new(banner)),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = session.with_catalog(|c| c.cart_count());
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogState) -> R,
    {
        let catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_catalog_mut(|c| c.toggle_cart(id))?;
    /// ```
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CatalogState) -> R,
    {
        let mut catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }

    /// Executes a function with write access to the banner position.
    pub fn with_banner_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BannerCarousel) -> R,
    {
        let mut banner = self.banner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut banner)
    }
}

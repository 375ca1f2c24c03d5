//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPFLOW_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shopflow_core::{seed, Money, BANNER_INTERVAL_MS, BANNER_SIZE};
use tracing::warn;

/// Storefront configuration.
///
/// The three screen variants the storefront grew out of only differed in
/// these values, so they are configuration rather than code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the top bar)
    pub store_name: String,

    /// Currency symbol (for price labels)
    pub currency_symbol: String,

    /// How many leading products the banner cycles through
    pub banner_size: usize,

    /// Delay between banner advances, in milliseconds
    pub banner_interval_ms: u64,

    /// Category chips in display order, `"All"` included
    pub categories: Vec<String>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "ShopFlow"
    /// - Currency: ₹
    /// - Banner: first 6 products, every 2.5 s
    /// - Categories: the built-in chip list
    fn default() -> Self {
        ConfigState {
            store_name: "ShopFlow".to_string(),
            currency_symbol: "₹".to_string(),
            banner_size: BANNER_SIZE,
            banner_interval_ms: BANNER_INTERVAL_MS,
            categories: seed::default_categories(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFLOW_STORE_NAME`: Override store name
    /// - `SHOPFLOW_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SHOPFLOW_BANNER_SIZE`: Banner slide count (e.g., "6")
    /// - `SHOPFLOW_BANNER_INTERVAL_MS`: Banner delay (e.g., "2500")
    /// - `SHOPFLOW_CATEGORIES`: Comma-separated chips (e.g., "All,Skin,Hair")
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup.
    ///
    /// Unparseable or zero numbers are ignored with a warning. Category lists are
    /// taken as given; the session validates them.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SHOPFLOW_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("SHOPFLOW_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("SHOPFLOW_BANNER_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.banner_size = size,
                _ => warn!(value = %raw, "Ignoring invalid SHOPFLOW_BANNER_SIZE"),
            }
        }

        if let Some(raw) = lookup("SHOPFLOW_BANNER_INTERVAL_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.banner_interval_ms = ms,
                _ => warn!(value = %raw, "Ignoring invalid SHOPFLOW_BANNER_INTERVAL_MS"),
            }
        }

        if let Some(raw) = lookup("SHOPFLOW_CATEGORIES") {
            config.categories = raw.split(',').map(|c| c.trim().to_string()).collect();
        }

        config
    }

    /// Banner delay as a `Duration`.
    pub fn banner_interval(&self) -> Duration {
        Duration::from_millis(self.banner_interval_ms)
    }

    /// Formats a price with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_units(2799)), "₹2799");
    /// ```
    pub fn format_price(&self, price: Money) -> String {
        price.format_with(&self.currency_symbol)
    }
}

//! # Favorites Commands
//!
//! The heart icon on product cards and the favorites icon in the top bar.
//! Favorites never touch the cart.

use shopflow_core::ProductId;
use tracing::debug;

use super::product::ProductCard;
use super::{title_of, IntentResponse, SummaryResponse};
use crate::error::ApiError;
use crate::notify;
use crate::state::{ConfigState, SessionState};

/// Marks or unmarks a product as a favorite.
pub fn toggle_favorite(session: &SessionState, id: ProductId) -> Result<IntentResponse, ApiError> {
    debug!(product_id = %id, "toggle_favorite command");

    session.with_catalog_mut(|c| -> Result<IntentResponse, ApiError> {
        let title = title_of(c, id)?;
        let toggle = c.toggle_favorite(id)?;
        let message = if toggle.member {
            notify::added_to_favorites(&title)
        } else {
            notify::removed_from_favorites(&title)
        };
        Ok(IntentResponse::new(id, toggle, Some(message)))
    })
}

/// Summarizes favorites for the favorites icon.
pub fn show_favorites(session: &SessionState, config: &ConfigState) -> SummaryResponse {
    debug!("show_favorites command");

    session.with_catalog(|c| {
        let count = c.favorite_count();
        SummaryResponse {
            count,
            badge: notify::badge(count),
            products: c
                .favorite_products()
                .into_iter()
                .map(|p| ProductCard::new(p, c, config))
                .collect(),
            total_label: None,
            message: notify::favorites_summary(count),
        }
    })
}

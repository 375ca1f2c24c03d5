//! # Cart Commands
//!
//! Cart gestures on product cards and the cart icon.
//!
//! ## Two Ways In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [Add to cart] button ──► add_to_cart()   one-way: adds, never removes │
//! │                                                                         │
//! │  cart management ───────► toggle_cart()   adds or removes              │
//! │                                                                         │
//! │  cart icon ─────────────► show_cart()     "Cart: 3 items" + total      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The product card button only ever adds; pressing it again on a product
//! already in the cart changes nothing and shows no snackbar.

use shopflow_core::ProductId;
use tracing::debug;

use super::product::ProductCard;
use super::{title_of, IntentResponse, SummaryResponse};
use crate::error::ApiError;
use crate::notify;
use crate::state::{ConfigState, SessionState};

/// Adds a product to the cart if it isn't there yet.
///
/// ## Returns
/// Cart membership and size. `message` is set only when the cart changed.
pub fn add_to_cart(session: &SessionState, id: ProductId) -> Result<IntentResponse, ApiError> {
    debug!(product_id = %id, "add_to_cart command");

    session.with_catalog_mut(|c| -> Result<IntentResponse, ApiError> {
        let title = title_of(c, id)?;
        if c.is_in_cart(id) {
            let count = c.cart_count();
            return Ok(IntentResponse {
                product_id: id,
                member: true,
                count,
                badge: notify::badge(count),
                message: None,
            });
        }

        let toggle = c.toggle_cart(id)?;
        Ok(IntentResponse::new(id, toggle, Some(notify::added_to_cart(&title))))
    })
}

/// Adds the product to the cart, or removes it if already there.
pub fn toggle_cart(session: &SessionState, id: ProductId) -> Result<IntentResponse, ApiError> {
    debug!(product_id = %id, "toggle_cart command");

    session.with_catalog_mut(|c| -> Result<IntentResponse, ApiError> {
        let title = title_of(c, id)?;
        let toggle = c.toggle_cart(id)?;
        let message = if toggle.member {
            notify::added_to_cart(&title)
        } else {
            notify::removed_from_cart(&title)
        };
        Ok(IntentResponse::new(id, toggle, Some(message)))
    })
}

/// Summarizes the cart for the cart icon.
pub fn show_cart(session: &SessionState, config: &ConfigState) -> SummaryResponse {
    debug!("show_cart command");

    session.with_catalog(|c| {
        let count = c.cart_count();
        SummaryResponse {
            count,
            badge: notify::badge(count),
            products: c
                .cart_products()
                .into_iter()
                .map(|p| ProductCard::new(p, c, config))
                .collect(),
            total_label: Some(config.format_price(c.cart_total())),
            message: notify::cart_summary(count),
        }
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
    fn test_add_to_cart_is_one_way() {
        let (session, _) = setup();
        let id = ProductId::new(2);

        let first = add_to_cart(&session, id).unwrap();
        assert!(first.member);
        assert_eq!(first.count, 1);
        assert_eq!(first.badge.as_deref(), Some("1"));
        assert_eq!(first.message.as_deref(), Some("Sup Hair Repair Oil added to cart"));

        let second = add_to_cart(&session, id).unwrap();
        assert!(second.member);
        assert_eq!(second.count, 1);
        assert_eq!(second.message, None);
    }

    #[test]
    fn test_toggle_cart_removes() {
        let (session, _) = setup();
        let id = ProductId::new(5);

        toggle_cart(&session, id).unwrap();
        let removed = toggle_cart(&session, id).unwrap();
        assert!(!removed.member);
        assert_eq!(removed.count, 0);
        assert_eq!(removed.badge, None);
        assert_eq!(removed.message.as_deref(), Some("Sup Men Beard Balm removed from cart"));
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let (session, config) = setup();
        let err = add_to_cart(&session, ProductId::new(77)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownProduct);

        let err = toggle_cart(&session, ProductId::new(77)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownProduct);
        assert_eq!(show_cart(&session, &config).count, 0);
    }

    #[test]
    fn test_show_cart() {
        let (session, config) = setup();
        let empty = show_cart(&session, &config);
        assert_eq!(empty.message, "Cart is empty");
        assert_eq!(empty.total_label.as_deref(), Some("₹0"));

        add_to_cart(&session, ProductId::new(4)).unwrap();
        add_to_cart(&session, ProductId::new(1)).unwrap();

        let summary = show_cart(&session, &config);
        assert_eq!(summary.message, "Cart: 2 items");
        assert_eq!(summary.total_label.as_deref(), Some("₹8298"));
        let ids: Vec<u32> = summary.products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(summary.products.iter().all(|p| p.in_cart));
    }
}

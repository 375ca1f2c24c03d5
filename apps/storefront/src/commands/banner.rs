//! # Banner Commands
//!
//! Called by the driver on every banner tick. The banner cycles through the
//! leading products of the catalog, not the filtered list.

use serde::Serialize;
use shopflow_core::ProductId;
use tracing::trace;

use crate::state::SessionState;

/// The slide now in view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub index: usize,
    pub product_id: ProductId,
    pub image_ref: String,
}

/// Advances the banner by one slide.
///
/// ## Returns
/// `None` when the banner has no slides.
pub fn advance_banner(session: &SessionState) -> Option<BannerResponse> {
    let index = session.with_banner_mut(|b| b.advance())?;
    let response = session.with_catalog(|c| {
        c.products().get(index).map(|p| BannerResponse {
            index,
            product_id: p.id,
            image_ref: p.image_ref.as_str().to_string(),
        })
    });
    trace!(index, "banner advanced");
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    #[test]
    fn test_banner_cycles_leading_products() {
        let session = SessionState::new(&ConfigState::default()).unwrap();

        let ids: Vec<u32> = (0..7)
            .filter_map(|_| advance_banner(&session))
            .map(|r| r.product_id.get())
            .collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6, 1, 2]);
    }

    #[test]
    fn test_empty_banner() {
        let config = ConfigState {
            banner_size: 0,
            ..ConfigState::default()
        };
        let session = SessionState::new(&config).unwrap();
        assert_eq!(advance_banner(&session), None);
    }
}

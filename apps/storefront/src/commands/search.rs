//! # Search Command
//!
//! The top bar's search icon. There is no search index behind it; tapping
//! it only acknowledges the gesture.

use serde::Serialize;
use tracing::debug;

use crate::notify;

/// Reply to a top-bar gesture that carries only a snackbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub message: String,
}

/// Opens search.
pub fn open_search() -> NoticeResponse {
    debug!("open_search");
    NoticeResponse {
        message: notify::search_opened(),
    }
}

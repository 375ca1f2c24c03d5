//! # State Module
//!
//! Holds the storefront's state for one screen session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐    ┌──────────────────────────────┐  │
//! │  │        SessionState          │    │        ConfigState           │  │
//! │  │                              │    │                              │  │
//! │  │  Arc<Mutex<CatalogState>>    │    │  store_name                  │  │
//! │  │  Arc<Mutex<BannerCarousel>>  │    │  currency_symbol             │  │
//! │  │  session id, started_at      │    │  banner size / interval      │  │
//! │  └──────────────────────────────┘    │  categories                  │  │
//! │                                      └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: each piece behind its own Mutex, never held across    │
//! │    an await                                                            │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;

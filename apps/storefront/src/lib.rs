//! # ShopFlow Storefront Library
//!
//! The headless storefront screen: one session, driven by typed gestures.
//!
//! ## Module Organization
//! ```text
//! shopflow_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── driver.rs       ◄─── Gesture parsing and the event loop
//! ├── notify.rs       ◄─── Snackbar texts and badges
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Catalog + banner for one screen session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared reply types
//! │   ├── product.rs  ◄─── Listing, categories, detail
//! │   ├── cart.rs     ◄─── Cart gestures
//! │   ├── favorites.rs◄─── Favorite gestures
//! │   └── banner.rs   ◄─── Banner tick
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod driver;
pub mod error;
pub mod notify;
pub mod state;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use state::{ConfigState, SessionState};

/// Runs the storefront until stdin closes or `quit` arrives.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults + SHOPFLOW_* overrides                                   │
/// │                                                                         │
/// │  3. Start Session ────────────────────────────────────────────────────► │
/// │     • Seed catalog validated against configured categories              │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • stdin gestures → JSON replies on stdout                           │
/// │     • banner ticks every banner_interval_ms                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, categories = ?config.categories, "Starting ShopFlow storefront");

    let session = SessionState::new(&config)?;
    info!(
        session_id = %session.id(),
        started_at = %session.started_at(),
        "Session started"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    driver::serve(&session, &config, stdin, stdout).await?;

    let (cart, favorites) = session.with_catalog(|c| (c.cart_count(), c.favorite_count()));
    info!(session_id = %session.id(), cart, favorites, "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopflow=trace` - Show banner ticks too
/// - Default: INFO, DEBUG for shopflow crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopflow=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

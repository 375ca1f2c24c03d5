//! # ShopFlow Storefront Entry Point
//!
//! Runs one headless storefront screen session.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration (defaults + `SHOPFLOW_*` overrides)
//! 3. Build the session from the seed catalog
//! 4. Serve gestures from stdin while the banner ticks
//!
//! ## Gestures
//! ```text
//! category <name>   list       add <id>    cart <id>
//! fav <id>          view <id>  cart        favs       quit
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match shopflow_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopflow-storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}

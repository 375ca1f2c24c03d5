//! # Driver
//!
//! Feeds gestures into the session and writes replies, one JSON object per
//! line.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         tokio::select!                                  │
//! │                                                                         │
//! │   input line ──► Command::from_str ──► dispatch() ──► Reply ──► output  │
//! │                                                                         │
//! │   banner tick ──► commands::banner::advance_banner()   (logged only)    │
//! │                                                                         │
//! │   EOF or "quit" ──► loop ends                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both branches run on the same task, so a gesture and a tick never
//! interleave inside one command.

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use shopflow_core::ProductId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::commands::{banner, cart, favorites, product, search};
use crate::error::{ApiError, AppError};
use crate::state::{ConfigState, SessionState};

/// A parsed gesture line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `category <name>`
    SelectCategory(String),
    /// `list`
    List,
    /// `add <id>`
    AddToCart(ProductId),
    /// `cart <id>`
    ToggleCart(ProductId),
    /// `fav <id>`
    ToggleFavorite(ProductId),
    /// `view <id>`
    View(ProductId),
    /// `cart`
    ShowCart,
    /// `favs`
    ShowFavorites,
    /// `search`
    Search,
    /// `quit`
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim())),
            None => (line, None),
        };

        match (verb, arg) {
            ("category", Some(name)) => Ok(Command::SelectCategory(name.to_string())),
            ("list", None) => Ok(Command::List),
            ("add", Some(id)) => parse_id(id).map(Command::AddToCart),
            ("cart", Some(id)) => parse_id(id).map(Command::ToggleCart),
            ("cart", None) => Ok(Command::ShowCart),
            ("fav", Some(id)) => parse_id(id).map(Command::ToggleFavorite),
            ("view", Some(id)) => parse_id(id).map(Command::View),
            ("favs", None) => Ok(Command::ShowFavorites),
            ("search", None) => Ok(Command::Search),
            ("quit", None) => Ok(Command::Quit),
            _ => Err(ApiError::bad_request(format!("Unknown gesture: {}", line))),
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<u32>()
        .map(ProductId::new)
        .map_err(|_| ApiError::bad_request(format!("Invalid product id: {}", raw)))
}

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "body")]
pub enum Reply {
    Ok(Value),
    Error(ApiError),
}

/// Runs one command against the session.
///
/// `Quit` is handled by the loop and yields an empty reply here.
pub fn dispatch(
    session: &SessionState,
    config: &ConfigState,
    command: Command,
) -> Result<Value, ApiError> {
    let value = match command {
        Command::SelectCategory(name) => {
            serde_json::to_value(product::select_category(session, config, &name)?)?
        }
        Command::List => serde_json::to_value(product::get_products(session, config))?,
        Command::AddToCart(id) => serde_json::to_value(cart::add_to_cart(session, id)?)?,
        Command::ToggleCart(id) => serde_json::to_value(cart::toggle_cart(session, id)?)?,
        Command::ToggleFavorite(id) => {
            serde_json::to_value(favorites::toggle_favorite(session, id)?)?
        }
        Command::View(id) => serde_json::to_value(product::view_product(session, config, id)?)?,
        Command::ShowCart => serde_json::to_value(cart::show_cart(session, config))?,
        Command::ShowFavorites => serde_json::to_value(favorites::show_favorites(session, config))?,
        Command::Search => serde_json::to_value(search::open_search())?,
        Command::Quit => Value::Null,
    };
    Ok(value)
}

/// Serves gestures from `input` until EOF or `quit`, ticking the banner at
/// the configured interval.
pub async fn serve<R, W>(
    session: &SessionState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let period = config.banner_interval();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(slide) = banner::advance_banner(session) {
                    debug!(index = slide.index, product_id = %slide.product_id, "banner tick");
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }

                let result = line.parse::<Command>().and_then(|command| {
                    if command == Command::Quit {
                        return Ok(None);
                    }
                    dispatch(session, config, command).map(Some)
                });

                let reply = match result {
                    Ok(None) => break,
                    Ok(Some(value)) => Reply::Ok(value),
                    Err(err) => {
                        warn!(code = ?err.code, message = %err.message, "gesture rejected");
                        Reply::Error(err)
                    }
                };

                let mut encoded = serde_json::to_vec(&reply)?;
                encoded.push(b'\n');
                output.write_all(&encoded).await?;
                output.flush().await?;
            }
        }
    }

    Ok(())
}

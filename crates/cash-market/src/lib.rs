//! Moscow Exchange market data
//!
//! This crate turns a ticker into a human-readable quote line using the
//! public ISS API. It includes:
//!
//! - An HTTP client for the `securities/{TICKER}.json` resource
//! - Column lookups over the tabular `marketdata` and `securities` sections
//! - Quote assembly (trading status, last/close price, company name)
//! - Localized rendering of quotes and lookup failures
//!
//! # Example
//!
//! ```rust,ignore
//! use cash_market::{MarketConfig, MoexClient, Ticker, render_all_quotes};
//! use cash_utils::Locale;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MoexClient::new(MarketConfig::default())?;
//!     let tickers = vec![Ticker::parse("sber")?, Ticker::parse("gazp")?];
//!     println!("{}", render_all_quotes(&client, &tickers, Locale::English).await);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod quote;
pub mod table;
pub mod text;
pub mod ticker;

pub use client::{MarketData, MoexClient};
pub use config::{MarketConfig, MarketConfigBuilder};
pub use error::{MarketError, Result};
pub use quote::{
    MarketState, Price, PriceKind, SelectedPrice, StockQuote, TradingStatus, fetch_quote,
    render_all_quotes, render_quote, select_price,
};
pub use table::{Section, SecurityDocument, Table};
pub use ticker::Ticker;

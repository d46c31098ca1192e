//! Stock watch-list bot
//!
//! A conversational front end over [`cash_market`]: users keep a watch-list
//! of Moscow Exchange tickers and ask for their prices.
//!
//! - **Menu commands**: add, remove, list, prices (buttons or slash commands)
//! - **Conversation mode**: after "add"/"remove" the next message is read as
//!   a ticker
//! - **Watch-list**: one ordered list shared by every chat of the process
//! - **Platforms**: Telegram (long polling) and a console REPL
//!
//! # Architecture
//!
//! `WatchlistBot` owns all state and turns one inbound text into one
//! [`BotReply`]. Platforms only move text and keyboards; they never touch
//! the watch-list directly. Market data comes through the
//! [`cash_market::MarketData`] trait, so tests run against fakes.
//!
//! # Example
//!
//! ```rust,ignore
//! use cash_bot::{BotConfig, ConversationId, WatchlistBot};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = WatchlistBot::from_config(&BotConfig::from_env()?)?;
//!     let reply = bot.handle(ConversationId(1), "/showprices").await;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod interface;
pub mod platforms;

pub use bot::{
    Command, ConversationId, ConversationMode, ConversationStore, Watchlist, WatchlistBot,
};
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use interface::{BotReply, BotTexts, Keyboard};

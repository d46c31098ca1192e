//! Chat transports
//!
//! Each platform moves text between its users and [`crate::WatchlistBot`].

pub mod console;
pub mod telegram;

pub use console::ConsoleBot;
pub use telegram::{TelegramBot, TelegramConfig};

use clap::ValueEnum;
use std::fmt;

/// Supported transports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Transport {
    /// Telegram long polling
    #[default]
    Telegram,
    /// Interactive stdin/stdout session
    Console,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Telegram => write!(f, "telegram"),
            Transport::Console => write!(f, "console"),
        }
    }
}

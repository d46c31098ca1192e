//! Error types for the bot

use cash_market::MarketError;
use cash_utils::ConfigError;
use thiserror::Error;

/// Bot specific errors
///
/// Conversation handling itself never fails; these cover start-up and the
/// transports.
#[derive(Debug, Error)]
pub enum BotError {
    /// Market data client could not be built
    #[error("Market data error: {0}")]
    MarketError(#[from] MarketError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Chat transport failure
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Console I/O failure
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ConfigError> for BotError {
    fn from(err: ConfigError) -> Self {
        BotError::ConfigError(err.to_string())
    }
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;

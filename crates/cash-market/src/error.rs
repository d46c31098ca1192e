//! Error types for market data lookups

use crate::table::Section;
use crate::text;
use crate::ticker::Ticker;
use cash_utils::{ConfigError, Locale};
use thiserror::Error;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Empty or otherwise unusable ticker text
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// The section has no data rows for the ticker
    #[error("No {section} rows for {ticker}")]
    NotFound {
        ticker: String,
        section: Section,
    },

    /// An expected column is absent from the section header
    #[error("Column {column} missing from {section} for {ticker}")]
    Schema {
        ticker: String,
        section: Section,
        column: &'static str,
    },

    /// Rows exist but none is on an accepted board
    #[error("No row for {ticker} on boards {}", .boards.join(", "))]
    NoMatchingBoard {
        ticker: String,
        boards: Vec<String>,
    },

    /// Every candidate row has a null price in the given column
    #[error("{field} price not available for {ticker}")]
    PriceUnavailable {
        ticker: String,
        field: &'static str,
    },

    /// No candidate row carries a company name
    #[error("Company name not available for {ticker}")]
    NameUnavailable {
        ticker: String,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        status: u16,
        url: String,
    },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MarketError {
    /// Whether the failure is about the data rather than the transport
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Schema { .. }
                | Self::NoMatchingBoard { .. }
                | Self::PriceUnavailable { .. }
                | Self::NameUnavailable { .. }
        )
    }

    /// Text shown to the chat user in place of a quote
    pub fn user_message(&self, ticker: &Ticker, locale: Locale) -> String {
        let texts = text::MarketTexts::for_locale(locale);
        match self {
            Self::NotFound { .. } => texts.not_found(ticker),
            Self::Schema { .. } => texts.missing_column(ticker),
            Self::NoMatchingBoard { boards, .. } => texts.no_board(ticker, boards),
            Self::PriceUnavailable { field, .. } => texts.price_missing(ticker, field),
            Self::NameUnavailable { .. } => texts.name_missing(ticker),
            Self::InvalidSymbol(_) => texts.invalid_symbol(ticker),
            Self::NetworkError(_) | Self::HttpStatus { .. } | Self::JsonError(_) => {
                texts.unavailable(ticker)
            }
            Self::ConfigError(_) => texts.unavailable(ticker),
        }
    }
}

impl From<ConfigError> for MarketError {
    fn from(err: ConfigError) -> Self {
        MarketError::ConfigError(err.to_string())
    }
}

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;

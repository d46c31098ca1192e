//! Ticker symbols

use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exchange symbol of a security, always trimmed and upper-case
///
/// Nothing beyond normalization is checked: an unknown ticker only shows up
/// when the exchange returns no rows for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize user text into a ticker
    pub fn parse(input: &str) -> Result<Self> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(MarketError::InvalidSymbol(input.to_string()));
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        Ticker::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = MarketError;

    fn try_from(value: String) -> Result<Self> {
        Ticker::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

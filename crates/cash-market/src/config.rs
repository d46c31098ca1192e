//! Configuration for market data lookups

use crate::error::{MarketError, Result};
use cash_utils::{env_or, env_var};
use std::time::Duration;
use url::Url;

/// ISS resource listing one security per `{TICKER}.json`
pub const DEFAULT_BASE_URL: &str = "https://iss.moex.com/iss/engines/stock/markets/shares/securities/";

/// User agent the exchange has always been queried with
pub const DEFAULT_USER_AGENT: &str = "HH-User-Agent";

/// Main board, small-lot board and SPB board
pub const DEFAULT_BOARDS: [&str; 3] = ["TQBR", "SMAL", "SPEQ"];

/// Board the company short name is read from
pub const PRIMARY_BOARD: &str = "TQBR";

/// `TRADINGSTATUS` value of a closed market
pub const CLOSED_STATUS: &str = "N";

fn boards(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Configuration for the ISS client
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Base URL of the securities resource
    pub base_url: String,

    /// `User-Agent` header sent with every request
    pub user_agent: String,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Boards accepted when reading the trading status
    pub status_boards: Vec<String>,

    /// Boards accepted when reading `LAST` and `CLOSEPRICE`
    pub price_boards: Vec<String>,

    /// Boards accepted when reading the company name
    pub name_boards: Vec<String>,

    /// Status code meaning the market is closed
    pub closed_status: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(30),
            status_boards: boards(&DEFAULT_BOARDS),
            price_boards: boards(&DEFAULT_BOARDS),
            name_boards: boards(&[PRIMARY_BOARD]),
            closed_status: CLOSED_STATUS.to_string(),
        }
    }
}

impl MarketConfig {
    /// Create a new configuration builder
    pub fn builder() -> MarketConfigBuilder {
        MarketConfigBuilder::default()
    }

    /// Defaults overridden by `MOEX_ISS_URL`, `MOEX_USER_AGENT` and `MOEX_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env()?.build()
    }

    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| MarketError::ConfigError(format!("invalid base URL {}: {e}", self.base_url)))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(MarketError::ConfigError(format!(
                "base URL must be an http(s) URL: {}",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;

        if self.user_agent.trim().is_empty() {
            return Err(MarketError::ConfigError("user_agent must not be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(MarketError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        for (name, list) in [
            ("status_boards", &self.status_boards),
            ("price_boards", &self.price_boards),
            ("name_boards", &self.name_boards),
        ] {
            if list.is_empty() {
                return Err(MarketError::ConfigError(format!("{name} must not be empty")));
            }
        }

        if self.closed_status.is_empty() {
            return Err(MarketError::ConfigError("closed_status must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Builder for MarketConfig
#[derive(Debug, Default)]
pub struct MarketConfigBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    request_timeout: Option<Duration>,
    status_boards: Option<Vec<String>>,
    price_boards: Option<Vec<String>>,
    name_boards: Option<Vec<String>>,
    closed_status: Option<String>,
}

impl MarketConfigBuilder {
    /// Set the base URL of the securities resource
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set boards for the trading status lookup
    pub fn status_boards<I, S>(mut self, boards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_boards = Some(boards.into_iter().map(Into::into).collect());
        self
    }

    /// Set boards for the price lookups
    pub fn price_boards<I, S>(mut self, boards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.price_boards = Some(boards.into_iter().map(Into::into).collect());
        self
    }

    /// Set boards for the company name lookup
    pub fn name_boards<I, S>(mut self, boards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_boards = Some(boards.into_iter().map(Into::into).collect());
        self
    }

    /// Set the closed-market status code
    pub fn closed_status(mut self, code: impl Into<String>) -> Self {
        self.closed_status = Some(code.into());
        self
    }

    /// Load overrides from the environment
    pub fn with_env(mut self) -> Result<Self> {
        if let Some(url) = env_var("MOEX_ISS_URL") {
            self.base_url = Some(url);
        }
        if let Some(agent) = env_var("MOEX_USER_AGENT") {
            self.user_agent = Some(agent);
        }
        if env_var("MOEX_TIMEOUT_SECS").is_some() {
            let secs: u64 = env_or("MOEX_TIMEOUT_SECS", 0)?;
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<MarketConfig> {
        let defaults = MarketConfig::default();

        let config = MarketConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            status_boards: self.status_boards.unwrap_or(defaults.status_boards),
            price_boards: self.price_boards.unwrap_or(defaults.price_boards),
            name_boards: self.name_boards.unwrap_or(defaults.name_boards),
            closed_status: self.closed_status.unwrap_or(defaults.closed_status),
        };

        config.validate()?;
        Ok(config)
    }
}

//! ISS API client
//!
//! Each lookup issues its own GET for `{base}/{TICKER}.json`; nothing is
//! cached, so a quote costs four requests.

use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::extract;
use crate::quote::{Price, TradingStatus};
use crate::table::SecurityDocument;
use crate::ticker::Ticker;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Source of the per-ticker fields a quote is built from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Trading status on the first accepted board
    async fn fetch_trading_status(&self, ticker: &Ticker) -> Result<TradingStatus>;

    /// Last trade price
    async fn fetch_last_price(&self, ticker: &Ticker) -> Result<Price>;

    /// Closing price
    async fn fetch_close_price(&self, ticker: &Ticker) -> Result<Price>;

    /// Company short name
    async fn fetch_company_name(&self, ticker: &Ticker) -> Result<String>;
}

/// Moscow Exchange ISS client
#[derive(Debug, Clone)]
pub struct MoexClient {
    client: Client,
    base_url: Url,
    config: Arc<MarketConfig>,
}

impl MoexClient {
    /// Create a new client from a validated configuration
    pub fn new(config: MarketConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            config: Arc::new(config),
        })
    }

    /// Create from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::new(MarketConfig::from_env()?)
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// URL of the security document for `ticker`
    pub fn security_url(&self, ticker: &Ticker) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                MarketError::ConfigError(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push(&format!("{ticker}.json"));
        Ok(url)
    }

    /// Fetch and decode the security document
    pub async fn fetch_document(&self, ticker: &Ticker) -> Result<SecurityDocument> {
        let url = self.security_url(ticker)?;
        debug!(%ticker, %url, "Requesting ISS security document");

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(MarketError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let document: SecurityDocument = serde_json::from_str(&body)?;

        debug!(
            %ticker,
            marketdata_rows = document.marketdata.data.len(),
            securities_rows = document.securities.data.len(),
            "ISS security document received"
        );
        Ok(document)
    }
}

#[async_trait]
impl MarketData for MoexClient {
    async fn fetch_trading_status(&self, ticker: &Ticker) -> Result<TradingStatus> {
        let document = self.fetch_document(ticker).await?;
        extract::trading_status(
            &document,
            ticker,
            &self.config.status_boards,
            &self.config.closed_status,
        )
    }

    async fn fetch_last_price(&self, ticker: &Ticker) -> Result<Price> {
        let document = self.fetch_document(ticker).await?;
        extract::last_price(&document, ticker, &self.config.price_boards)
    }

    async fn fetch_close_price(&self, ticker: &Ticker) -> Result<Price> {
        let document = self.fetch_document(ticker).await?;
        extract::close_price(&document, ticker, &self.config.price_boards)
    }

    async fn fetch_company_name(&self, ticker: &Ticker) -> Result<String> {
        let document = self.fetch_document(ticker).await?;
        extract::company_name(&document, ticker, &self.config.name_boards)
    }
}

//! Quote assembly and rendering
//!
//! A quote line combines the company name, an open/closed marker and the best
//! available price. Price selection and the marker are independent: the
//! same preference (last trade, then close) applies whether the market is
//! open or closed.

use crate::client::MarketData;
use crate::error::Result;
use crate::text::MarketTexts;
use crate::ticker::Ticker;
use cash_utils::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Whether the security is trading right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketState {
    Open,
    Closed,
}

/// Trading status reported for a security
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingStatus {
    /// Raw `TRADINGSTATUS` code; the exchange may send null
    pub code: Option<String>,
    pub state: MarketState,
}

impl TradingStatus {
    /// Interpret a raw status code; only `closed_code` means closed
    pub fn from_code(code: Option<&str>, closed_code: &str) -> Self {
        let state = if code == Some(closed_code) {
            MarketState::Closed
        } else {
            MarketState::Open
        };
        Self {
            code: code.map(str::to_string),
            state,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == MarketState::Closed
    }
}

/// Price in roubles as reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    // Whole prices keep one fractional digit: 180.0, not 180.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract().abs() < f64::EPSILON {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Which price field a quote shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceKind {
    /// `LAST`, the last trade
    Last,
    /// `CLOSEPRICE`, the closing auction price
    Close,
}

/// The price picked for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedPrice {
    pub kind: PriceKind,
    pub price: Price,
}

/// Prefer the last trade price, fall back to the close price
pub fn select_price(last: Option<Price>, close: Option<Price>) -> Option<SelectedPrice> {
    last.map(|price| SelectedPrice {
        kind: PriceKind::Last,
        price,
    })
    .or_else(|| {
        close.map(|price| SelectedPrice {
            kind: PriceKind::Close,
            price,
        })
    })
}

/// Everything needed to render one quote line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub ticker: Ticker,
    /// Company short name, or the ticker when the name lookup failed
    pub name: String,
    pub status: TradingStatus,
    pub price: Option<SelectedPrice>,
}

impl StockQuote {
    pub fn render(&self, locale: Locale) -> String {
        MarketTexts::for_locale(locale).quote_line(&self.name, self.status.state, self.price.as_ref())
    }
}

/// Collect status, prices and name for one ticker
///
/// Fails only when the trading status cannot be determined; price and name
/// failures degrade to "no price" and the bare ticker respectively.
pub async fn fetch_quote<M>(market: &M, ticker: &Ticker) -> Result<StockQuote>
where
    M: MarketData + ?Sized,
{
    let status = market.fetch_trading_status(ticker).await?;

    let last = market
        .fetch_last_price(ticker)
        .await
        .inspect_err(|e| debug!(%ticker, error = %e, "Last price unavailable"))
        .ok();
    let close = market
        .fetch_close_price(ticker)
        .await
        .inspect_err(|e| debug!(%ticker, error = %e, "Close price unavailable"))
        .ok();

    let name = match market.fetch_company_name(ticker).await {
        Ok(name) => name,
        Err(e) => {
            warn!(%ticker, error = %e, "Company name lookup failed, showing ticker instead");
            ticker.to_string()
        }
    };

    Ok(StockQuote {
        ticker: ticker.clone(),
        name,
        status,
        price: select_price(last, close),
    })
}

/// Render one quote line, or the localized reason it is unavailable
pub async fn render_quote<M>(market: &M, ticker: &Ticker, locale: Locale) -> String
where
    M: MarketData + ?Sized,
{
    match fetch_quote(market, ticker).await {
        Ok(quote) => quote.render(locale),
        Err(e) => {
            if e.is_data_error() {
                debug!(%ticker, error = %e, "No quote data");
            } else {
                warn!(%ticker, error = %e, "Quote service unavailable");
            }
            e.user_message(ticker, locale)
        }
    }
}

/// Render quotes for every ticker, one line each, in the given order
pub async fn render_all_quotes<M>(market: &M, tickers: &[Ticker], locale: Locale) -> String
where
    M: MarketData + ?Sized,
{
    let mut lines = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        lines.push(render_quote(market, ticker, locale).await);
    }
    lines.join("\n")
}

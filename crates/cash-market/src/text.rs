//! Localized texts for quote lines and lookup failures

use crate::quote::{MarketState, PriceKind, SelectedPrice};
use crate::ticker::Ticker;
use cash_utils::Locale;

/// Texts of the market-data layer for one locale
#[derive(Debug, Clone, Copy)]
pub struct MarketTexts {
    locale: Locale,
}

impl MarketTexts {
    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    /// Open/closed marker shown after the company name
    pub fn marker(&self, state: MarketState) -> &'static str {
        match (self.locale, state) {
            (Locale::Russian, MarketState::Open) => "торги 👍",
            (Locale::Russian, MarketState::Closed) => "торги ⛔️",
            (Locale::English, MarketState::Open) => "open 👍",
            (Locale::English, MarketState::Closed) => "closed ⛔️",
        }
    }

    pub fn price_phrase(&self, price: Option<&SelectedPrice>) -> String {
        match (self.locale, price) {
            (Locale::Russian, Some(p)) if p.kind == PriceKind::Last => {
                format!("последняя цена {} руб.", p.price)
            }
            (Locale::Russian, Some(p)) => format!("цена закрытия {} руб.", p.price),
            (Locale::Russian, None) => "цена отсутствует.".to_string(),
            (Locale::English, Some(p)) if p.kind == PriceKind::Last => {
                format!("last price {} RUB", p.price)
            }
            (Locale::English, Some(p)) => format!("close price {} RUB", p.price),
            (Locale::English, None) => "no price available".to_string(),
        }
    }

    /// `{name} | {marker}: {price}`
    pub fn quote_line(
        &self,
        name: &str,
        state: MarketState,
        price: Option<&SelectedPrice>,
    ) -> String {
        format!("{name} | {}: {}", self.marker(state), self.price_phrase(price))
    }

    pub fn not_found(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker} не найдена или торги закрыты."),
            Locale::English => format!("Stock {ticker} not found or trading is closed."),
        }
    }

    pub fn missing_column(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => {
                format!("Акция {ticker}: одна из необходимых колонок не найдена в данных.")
            }
            Locale::English => format!("Stock {ticker}: a required column is missing from the data."),
        }
    }

    pub fn no_board(&self, ticker: &Ticker, boards: &[String]) -> String {
        let boards = boards.join(", ");
        match self.locale {
            Locale::Russian => {
                format!("Акция {ticker}: не найдено ни одного режима торгов из {boards}.")
            }
            Locale::English => format!("Stock {ticker}: no trading board among {boards}."),
        }
    }

    pub fn price_missing(&self, ticker: &Ticker, field: &str) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker}: цена {field} не найдена."),
            Locale::English => format!("Stock {ticker}: {field} price not found."),
        }
    }

    pub fn name_missing(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker}: название не найдено."),
            Locale::English => format!("Stock {ticker}: company name not found."),
        }
    }

    pub fn invalid_symbol(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Некорректный тикер: {ticker}."),
            Locale::English => format!("Invalid ticker: {ticker}."),
        }
    }

    pub fn unavailable(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker}: сервис котировок недоступен."),
            Locale::English => format!("Stock {ticker}: market data service is unavailable."),
        }
    }
}

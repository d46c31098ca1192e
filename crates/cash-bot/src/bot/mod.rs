//! Watch-list bot
//!
//! This module turns inbound chat text into replies.
//!
//! # Features
//!
//! - **Menu interface**: buttons or `/addtext`, `/showtexts`, `/showprices`
//! - **Ticker input**: after add/remove the next message is the ticker
//! - **Watch-list**: ordered, duplicate-free, shared by every chat
//! - **Prices**: one quote line per watched ticker
//!
//! # Example
//!
//! ```rust,ignore
//! use cash_bot::{BotConfig, ConversationId, WatchlistBot};
//!
//! let bot = WatchlistBot::from_config(&BotConfig::default())?;
//! bot.handle(ConversationId(7), "Добавить акцию").await;
//! bot.handle(ConversationId(7), "sber").await;
//! let reply = bot.handle(ConversationId(7), "/showprices").await;
//! ```

pub mod commands;
pub mod conversation;
pub mod watchlist;

use crate::config::BotConfig;
use crate::error::Result;
use crate::interface::{BotReply, BotTexts};
use cash_market::{MarketData, MoexClient, Ticker, render_all_quotes};
use cash_utils::Locale;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub use commands::Command;
pub use conversation::{ConversationId, ConversationMode, ConversationStore};
pub use watchlist::Watchlist;

/// Conversation front end over a market data source
pub struct WatchlistBot {
    market: Arc<dyn MarketData>,
    texts: BotTexts,
    watchlist: Mutex<Watchlist>,
    conversations: Mutex<ConversationStore>,
}

impl WatchlistBot {
    /// Create a bot with an empty watch-list
    pub fn new(market: Arc<dyn MarketData>, locale: Locale) -> Self {
        Self {
            market,
            texts: BotTexts::for_locale(locale),
            watchlist: Mutex::new(Watchlist::new()),
            conversations: Mutex::new(ConversationStore::new()),
        }
    }

    /// Create a bot backed by the ISS client
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let client = MoexClient::new(config.market.clone())?;
        info!(locale = %config.locale, base_url = %client.config().base_url, "Bot ready");
        Ok(Self::new(Arc::new(client), config.locale))
    }

    pub fn locale(&self) -> Locale {
        self.texts.locale()
    }

    /// Copy of the watch-list in insertion order
    pub async fn watchlist(&self) -> Vec<Ticker> {
        self.watchlist.lock().await.to_vec()
    }

    /// Current input mode of a conversation
    pub async fn mode(&self, conversation: ConversationId) -> ConversationMode {
        self.conversations.lock().await.mode(conversation)
    }

    /// Handle one inbound message
    ///
    /// Never fails; market data problems come back as reply text.
    pub async fn handle(&self, conversation: ConversationId, input: &str) -> BotReply {
        let command = Command::parse(input);
        debug!(%conversation, ?command, "Handling message");

        match command {
            Command::Start => self.menu_reply(self.texts.welcome()),
            Command::Help => self.menu_reply(Command::help_text(self.locale())),
            Command::Add => {
                self.set_mode(conversation, ConversationMode::AwaitingAdd)
                    .await;
                self.menu_reply(self.texts.add_prompt())
            }
            Command::Remove => {
                self.set_mode(conversation, ConversationMode::AwaitingRemove)
                    .await;
                self.menu_reply(self.texts.remove_prompt())
            }
            Command::List => {
                let listing = self.texts.listing(self.watchlist.lock().await.iter());
                self.menu_reply(listing)
            }
            Command::Prices => self.prices().await,
            Command::Text(text) => self.handle_text(conversation, &text).await,
        }
    }

    async fn set_mode(&self, conversation: ConversationId, mode: ConversationMode) {
        self.conversations
            .lock()
            .await
            .set_mode(conversation, mode);
        debug!(%conversation, ?mode, "Mode changed");
    }

    async fn handle_text(&self, conversation: ConversationId, text: &str) -> BotReply {
        let ticker = Ticker::parse(text).ok();

        // Blank input keeps the pending mode so the user can retry
        let mode = {
            let mut conversations = self.conversations.lock().await;
            match ticker {
                Some(_) => conversations.reset(conversation),
                None => conversations.mode(conversation),
            }
        };

        let ticker = match (mode, ticker) {
            (ConversationMode::Idle, _) => return self.menu_reply(self.texts.unrecognized()),
            (_, None) => return self.menu_reply(self.texts.blank_ticker()),
            (_, Some(ticker)) => ticker,
        };

        let mut watchlist = self.watchlist.lock().await;
        let text = match mode {
            ConversationMode::AwaitingAdd if watchlist.add(ticker.clone()) => {
                info!(%ticker, "Ticker added");
                self.texts.added(&ticker)
            }
            ConversationMode::AwaitingAdd => self.texts.already_listed(&ticker),
            ConversationMode::AwaitingRemove if watchlist.remove(&ticker) => {
                info!(%ticker, "Ticker removed");
                self.texts.removed(&ticker)
            }
            ConversationMode::AwaitingRemove | ConversationMode::Idle => {
                self.texts.not_listed(&ticker)
            }
        };
        drop(watchlist);

        self.menu_reply(text)
    }

    async fn prices(&self) -> BotReply {
        // Snapshot so the lock is not held across network calls
        let tickers = self.watchlist.lock().await.to_vec();
        if tickers.is_empty() {
            return BotReply::text(self.texts.empty_list());
        }

        debug!(count = tickers.len(), "Fetching quotes");
        BotReply::text(render_all_quotes(self.market.as_ref(), &tickers, self.locale()).await)
    }

    fn menu_reply(&self, text: impl Into<String>) -> BotReply {
        BotReply::with_menu(text, self.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cash_market::{MarketError, Price, Section, TradingStatus};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeQuote {
        status: &'static str,
        last: Option<f64>,
        close: Option<f64>,
        name: &'static str,
    }

    /// In-memory market; unknown tickers have no market data rows
    #[derive(Default)]
    struct FakeMarket {
        quotes: HashMap<String, FakeQuote>,
        status_calls: AtomicUsize,
    }

    impl FakeMarket {
        fn with(mut self, ticker: &str, quote: FakeQuote) -> Self {
            self.quotes.insert(ticker.to_string(), quote);
            self
        }

        fn quote(&self, ticker: &Ticker) -> cash_market::Result<&FakeQuote> {
            self.quotes
                .get(ticker.as_str())
                .ok_or_else(|| MarketError::NotFound {
                    ticker: ticker.to_string(),
                    section: Section::MarketData,
                })
        }

        fn missing(ticker: &Ticker, field: &'static str) -> MarketError {
            MarketError::PriceUnavailable {
                ticker: ticker.to_string(),
                field,
            }
        }
    }

    #[async_trait]
    impl MarketData for FakeMarket {
        async fn fetch_trading_status(&self, ticker: &Ticker) -> cash_market::Result<TradingStatus> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            let quote = self.quote(ticker)?;
            Ok(TradingStatus::from_code(Some(quote.status), "N"))
        }

        async fn fetch_last_price(&self, ticker: &Ticker) -> cash_market::Result<Price> {
            self.quote(ticker)?
                .last
                .map(Price::new)
                .ok_or_else(|| Self::missing(ticker, "LAST"))
        }

        async fn fetch_close_price(&self, ticker: &Ticker) -> cash_market::Result<Price> {
            self.quote(ticker)?
                .close
                .map(Price::new)
                .ok_or_else(|| Self::missing(ticker, "CLOSEPRICE"))
        }

        async fn fetch_company_name(&self, ticker: &Ticker) -> cash_market::Result<String> {
            Ok(self.quote(ticker)?.name.to_string())
        }
    }

    fn market() -> FakeMarket {
        FakeMarket::default()
            .with(
                "SBER",
                FakeQuote {
                    status: "T",
                    last: Some(250.5),
                    close: Some(249.0),
                    name: "Сбербанк",
                },
            )
            .with(
                "GAZP",
                FakeQuote {
                    status: "N",
                    last: None,
                    close: Some(180.0),
                    name: "ГАЗПРОМ ао",
                },
            )
    }

    fn bot() -> WatchlistBot {
        WatchlistBot::new(Arc::new(market()), Locale::Russian)
    }

    fn t(symbol: &str) -> Ticker {
        Ticker::parse(symbol).unwrap()
    }

    const CHAT: ConversationId = ConversationId(1);

    async fn add(bot: &WatchlistBot, symbol: &str) -> BotReply {
        bot.handle(CHAT, "Добавить акцию").await;
        bot.handle(CHAT, symbol).await
    }

    #[tokio::test]
    async fn test_start_shows_menu() {
        let reply = bot().handle(CHAT, "/start").await;
        assert!(reply.text.starts_with("Добро пожаловать!"));
        assert_eq!(reply.keyboard.map(|k| k.rows.len()), Some(4));
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let reply = bot().handle(CHAT, "/help").await;
        assert_eq!(reply.text, Command::help_text(Locale::Russian));
        assert!(reply.text.contains("/showprices"));
        assert!(reply.keyboard.is_some());
    }

    #[tokio::test]
    async fn test_add_normalizes_and_resets_mode() {
        let bot = bot();

        let prompt = bot.handle(CHAT, "/addtext").await;
        assert!(prompt.text.contains("mtss"));
        assert_eq!(bot.mode(CHAT).await, ConversationMode::AwaitingAdd);

        let reply = bot.handle(CHAT, "  sber ").await;
        assert_eq!(reply.text, "Акция SBER добавлена.");
        assert!(reply.keyboard.is_some());
        assert_eq!(bot.mode(CHAT).await, ConversationMode::Idle);
        assert_eq!(bot.watchlist().await, vec![t("SBER")]);
    }

    #[tokio::test]
    async fn test_add_duplicate_leaves_list_unchanged() {
        let bot = bot();
        add(&bot, "sber").await;

        let reply = add(&bot, "SBER").await;

        assert_eq!(reply.text, "Акция SBER уже есть в списке.");
        assert_eq!(bot.watchlist().await, vec![t("SBER")]);
    }

    #[tokio::test]
    async fn test_remove_absent_leaves_list_unchanged() {
        let bot = bot();
        add(&bot, "sber").await;

        bot.handle(CHAT, "Удалить акцию").await;
        let reply = bot.handle(CHAT, "gazp").await;

        assert_eq!(reply.text, "Акции GAZP нет в списке.");
        assert_eq!(bot.watchlist().await, vec![t("SBER")]);
        assert_eq!(bot.mode(CHAT).await, ConversationMode::Idle);
    }

    #[tokio::test]
    async fn test_remove_present() {
        let bot = bot();
        add(&bot, "sber").await;
        add(&bot, "gazp").await;

        bot.handle(CHAT, "/remove").await;
        let reply = bot.handle(CHAT, "sber").await;

        assert_eq!(reply.text, "Акция SBER удалена.");
        assert_eq!(bot.watchlist().await, vec![t("GAZP")]);
    }

    #[tokio::test]
    async fn test_blank_ticker_keeps_mode() {
        let bot = bot();
        bot.handle(CHAT, "/addtext").await;

        let reply = bot.handle(CHAT, "   ").await;

        assert_eq!(reply.text, "Тикер не может быть пустым. Введите тикер акции:");
        assert_eq!(bot.mode(CHAT).await, ConversationMode::AwaitingAdd);
        assert!(bot.watchlist().await.is_empty());
    }

    #[tokio::test]
    async fn test_text_while_idle() {
        let bot = bot();
        let reply = bot.handle(CHAT, "sber").await;
        assert_eq!(
            reply.text,
            "Используйте кнопки для добавления или удаления акций."
        );
        assert!(bot.watchlist().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let bot = bot();
        assert_eq!(bot.handle(CHAT, "/showtexts").await.text, "Нет добавленных акций.");

        add(&bot, "gazp").await;
        add(&bot, "sber").await;

        let reply = bot.handle(CHAT, "Показать акции").await;
        assert_eq!(reply.text, "Добавленные акции:\nGAZP\nSBER");
        assert!(reply.keyboard.is_some());
    }

    #[tokio::test]
    async fn test_prices_empty_list_skips_market() {
        let market = Arc::new(market());
        let bot = WatchlistBot::new(market.clone(), Locale::Russian);

        let reply = bot.handle(CHAT, "/showprices").await;

        assert_eq!(reply.text, "Нет добавленных акций.");
        assert!(reply.keyboard.is_none());
        assert_eq!(market.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_prices_render_each_ticker() {
        let bot = bot();
        add(&bot, "sber").await;
        add(&bot, "gazp").await;
        add(&bot, "xxxx").await;

        let reply = bot.handle(CHAT, "Узнать цены").await;

        let lines: Vec<&str> = reply.text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Сбербанк | торги 👍: последняя цена 250.5 руб.",
                "ГАЗПРОМ ао | торги ⛔️: цена закрытия 180.0 руб.",
                "Акция XXXX не найдена или торги закрыты.",
            ]
        );
        assert!(reply.keyboard.is_none());
    }

    #[tokio::test]
    async fn test_modes_are_per_conversation() {
        let bot = bot();
        bot.handle(ConversationId(1), "/addtext").await;

        let other = bot.handle(ConversationId(2), "sber").await;
        assert_eq!(
            other.text,
            "Используйте кнопки для добавления или удаления акций."
        );

        bot.handle(ConversationId(1), "sber").await;
        assert_eq!(bot.watchlist().await, vec![t("SBER")]);
    }

    #[tokio::test]
    async fn test_watchlist_shared_between_conversations() {
        let bot = bot();
        bot.handle(ConversationId(1), "/addtext").await;
        bot.handle(ConversationId(1), "sber").await;

        let reply = bot.handle(ConversationId(2), "/showtexts").await;
        assert_eq!(reply.text, "Добавленные акции:\nSBER");
    }

    #[test]
    fn test_english_locale() {
        let bot = WatchlistBot::new(Arc::new(market()), Locale::English);
        let reply = tokio_test::block_on(bot.handle(CHAT, "/start"));
        assert!(reply.text.starts_with("Welcome!"));
        assert_eq!(
            reply.keyboard.and_then(|k| k.rows.first().cloned()),
            Some(vec!["Add stock".to_string()])
        );
    }
}

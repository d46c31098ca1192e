//! Bot configuration

use crate::error::Result;
use cash_market::MarketConfig;
use cash_utils::{Locale, env_or};

/// Configuration for the watch-list bot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotConfig {
    /// Locale of every user-facing text
    pub locale: Locale,
    /// Market data client configuration
    pub market: MarketConfig,
}

impl BotConfig {
    /// Create config from environment variables
    ///
    /// Reads `CASHBOT_LOCALE` plus the `MOEX_*` variables of [`MarketConfig`].
    pub fn from_env() -> Result<Self> {
        let locale = env_or("CASHBOT_LOCALE", Locale::default())?;
        let market = MarketConfig::from_env()?;
        Ok(Self { locale, market })
    }

    /// Create a builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }
}

/// Builder for BotConfig
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    locale: Option<Locale>,
    market: Option<MarketConfig>,
}

impl BotConfigBuilder {
    /// Set locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Set market config
    pub fn market(mut self, config: MarketConfig) -> Self {
        self.market = Some(config);
        self
    }

    /// Build the config
    pub fn build(self) -> BotConfig {
        let defaults = BotConfig::default();
        BotConfig {
            locale: self.locale.unwrap_or(defaults.locale),
            market: self.market.unwrap_or(defaults.market),
        }
    }
}

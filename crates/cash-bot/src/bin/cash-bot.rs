//! Stock watch-list bot
//!
//! # Usage
//!
//! ```bash
//! # Telegram
//! export TELEGRAM_BOT_TOKEN="123456:ABC..."
//! cargo run --bin cash-bot -p cash-bot
//!
//! # Local console session in English
//! cargo run --bin cash-bot -p cash-bot -- --transport console --locale en
//! ```

use cash_bot::platforms::{ConsoleBot, TelegramBot, TelegramConfig, Transport};
use cash_bot::{BotConfig, WatchlistBot};
use cash_utils::{Locale, LogFormat, init_tracing_with};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "cash-bot", version, about = "Moscow Exchange stock watch-list bot")]
struct Cli {
    /// Chat transport
    #[arg(short, long, value_enum, default_value_t = Transport::Telegram)]
    transport: Transport,

    /// Reply language (overrides CASHBOT_LOCALE)
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Log output: pretty or json
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing_with(cli.log_format);

    let mut config = BotConfig::from_env()?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    info!(transport = %cli.transport, locale = %config.locale, "Starting cash-bot");

    let bot = Arc::new(WatchlistBot::from_config(&config)?);

    match cli.transport {
        Transport::Telegram => {
            let telegram = TelegramConfig::from_env()?;
            TelegramBot::new(telegram, bot).run().await?;
        }
        Transport::Console => ConsoleBot::new(bot).run().await?,
    }

    Ok(())
}

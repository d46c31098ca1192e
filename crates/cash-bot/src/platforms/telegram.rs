//! Telegram transport
//!
//! Long polling through teloxide. Every text message is handed to the bot
//! and the reply is sent back to the same chat.

use crate::bot::{ConversationId, WatchlistBot};
use crate::error::Result;
use crate::interface::Keyboard;
use cash_utils::env_required;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup};
use tracing::{debug, info};

/// Telegram bot configuration
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token from BotFather
    pub token: String,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl TelegramConfig {
    /// Create config from `TELEGRAM_BOT_TOKEN`
    pub fn from_env() -> Result<Self> {
        let token = env_required("TELEGRAM_BOT_TOKEN")?;
        Ok(Self { token })
    }
}

/// Telegram front end for a [`WatchlistBot`]
pub struct TelegramBot {
    config: TelegramConfig,
    bot: Arc<WatchlistBot>,
}

impl TelegramBot {
    pub fn new(config: TelegramConfig, bot: Arc<WatchlistBot>) -> Self {
        Self { config, bot }
    }

    /// Poll for updates until interrupted
    pub async fn run(self) -> Result<()> {
        let telegram = Bot::new(self.config.token);
        let bot = self.bot;
        info!("Starting Telegram long polling");

        teloxide::repl(telegram, move |telegram: Bot, msg: Message| {
            let bot = Arc::clone(&bot);
            async move {
                let Some(text) = msg.text() else {
                    debug!(chat = msg.chat.id.0, "Ignoring non-text message");
                    return Ok(());
                };

                let reply = bot.handle(ConversationId(msg.chat.id.0), text).await;
                let request = telegram.send_message(msg.chat.id, reply.text);
                match reply.keyboard {
                    Some(keyboard) => request.reply_markup(to_markup(&keyboard)).await?,
                    None => request.await?,
                };
                Ok(())
            }
        })
        .await;

        info!("Telegram polling stopped");
        Ok(())
    }
}

fn to_markup(keyboard: &Keyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>());
    let markup = KeyboardMarkup::new(rows);
    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}

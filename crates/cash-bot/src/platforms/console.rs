//! Console transport
//!
//! A single conversation over stdin/stdout. Menu buttons are printed under
//! each reply and can be typed verbatim.

use crate::bot::{ConversationId, WatchlistBot};
use crate::error::Result;
use crate::interface::BotReply;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

/// Conversation id used for the console session
pub const CONSOLE_CONVERSATION: ConversationId = ConversationId(0);

const PROMPT: &str = ">>> ";

/// Interactive console front end for a [`WatchlistBot`]
pub struct ConsoleBot {
    bot: Arc<WatchlistBot>,
}

impl ConsoleBot {
    pub fn new(bot: Arc<WatchlistBot>) -> Self {
        Self { bot }
    }

    /// Run on stdin/stdout until EOF or `/exit`
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Run on arbitrary streams
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting console session");
        let welcome = self.bot.handle(CONSOLE_CONVERSATION, "/start").await;
        write_reply(&mut writer, &welcome).await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if is_exit(&line) {
                break;
            }

            let reply = self.bot.handle(CONSOLE_CONVERSATION, &line).await;
            write_reply(&mut writer, &reply).await?;
        }

        writer.write_all(b"\n").await?;
        writer.flush().await?;
        info!("Console session closed");
        Ok(())
    }
}

fn is_exit(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "/exit" | "/quit" | "/q"
    )
}

async fn write_reply<W>(writer: &mut W, reply: &BotReply) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut out = format!("{}\n", reply.text);
    if let Some(keyboard) = &reply.keyboard {
        for label in keyboard.labels() {
            out.push_str("  [");
            out.push_str(label);
            out.push_str("]\n");
        }
    }
    writer.write_all(out.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cash_market::{MarketData, MarketError, Price, Ticker, TradingStatus};
    use cash_utils::Locale;

    struct OfflineMarket;

    #[async_trait]
    impl MarketData for OfflineMarket {
        async fn fetch_trading_status(&self, _: &Ticker) -> cash_market::Result<TradingStatus> {
            Err(MarketError::ConfigError("offline".to_string()))
        }

        async fn fetch_last_price(&self, _: &Ticker) -> cash_market::Result<Price> {
            Err(MarketError::ConfigError("offline".to_string()))
        }

        async fn fetch_close_price(&self, _: &Ticker) -> cash_market::Result<Price> {
            Err(MarketError::ConfigError("offline".to_string()))
        }

        async fn fetch_company_name(&self, _: &Ticker) -> cash_market::Result<String> {
            Err(MarketError::ConfigError("offline".to_string()))
        }
    }

    fn console() -> (ConsoleBot, Arc<WatchlistBot>) {
        let bot = Arc::new(WatchlistBot::new(Arc::new(OfflineMarket), Locale::English));
        (ConsoleBot::new(Arc::clone(&bot)), bot)
    }

    #[tokio::test]
    async fn test_session_until_exit() {
        let (console, bot) = console();
        let input: &[u8] = b"add stock\nsber\n/exit\nshow stocks\n";
        let mut output = Vec::new();

        console.run_with(input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Welcome!"));
        assert!(output.contains("  [Add stock]\n"));
        assert!(output.contains("Stock SBER added."));
        assert!(!output.contains("Watched stocks:"));
        assert_eq!(bot.watchlist().await, vec![Ticker::parse("SBER").unwrap()]);
    }

    #[tokio::test]
    async fn test_session_ends_on_eof() {
        let (console, _) = console();
        let input: &[u8] = b"/showprices\n";
        let mut output = Vec::new();

        console.run_with(input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No stocks added yet."));
    }

    #[test]
    fn test_exit_words() {
        assert!(is_exit("/exit"));
        assert!(is_exit(" /QUIT "));
        assert!(!is_exit("exit"));
    }
}

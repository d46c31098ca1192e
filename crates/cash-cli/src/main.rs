//! Command-line quote lookup for Moscow Exchange tickers
//!
//! ```bash
//! cash-cli sber gazp
//! cash-cli --output lines --locale en mtss
//! ```

use cash_market::text::MarketTexts;
use cash_market::{MarketConfig, MarketData, MoexClient, Ticker, fetch_quote, render_all_quotes};
use cash_utils::{Locale, LogFormat, init_tracing_with};
use clap::{Parser, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// One row per ticker
    Table,
    /// The same lines the chat bot sends
    Lines,
}

#[derive(Parser, Debug)]
#[command(name = "cash-cli")]
#[command(about = "Print Moscow Exchange quotes for the given tickers", long_about = None)]
struct Args {
    /// Tickers to look up, case-insensitive
    #[arg(required = true, value_parser = parse_ticker)]
    tickers: Vec<Ticker>,

    /// Output language
    #[arg(short, long, default_value_t = Locale::Russian)]
    locale: Locale,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = Output::Table)]
    output: Output,

    /// Log output: pretty or json
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

fn parse_ticker(input: &str) -> Result<Ticker, String> {
    Ticker::parse(input).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing_with(args.log_format);

    let client = MoexClient::new(MarketConfig::from_env()?)?;
    info!(count = args.tickers.len(), "Looking up quotes");

    let rendered = match args.output {
        Output::Lines => render_all_quotes(&client, &args.tickers, args.locale).await,
        Output::Table => quote_table(&client, &args.tickers, args.locale)
            .await
            .to_string(),
    };
    println!("{rendered}");

    Ok(())
}

fn headers(locale: Locale) -> [&'static str; 4] {
    match locale {
        Locale::Russian => ["Тикер", "Название", "Торги", "Цена"],
        Locale::English => ["Ticker", "Name", "Trading", "Price"],
    }
}

/// Table with one row per ticker; failed lookups span the detail columns
async fn quote_table<M>(market: &M, tickers: &[Ticker], locale: Locale) -> Table
where
    M: MarketData + ?Sized,
{
    let texts = MarketTexts::for_locale(locale);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers(locale));

    for ticker in tickers {
        let row = match fetch_quote(market, ticker).await {
            Ok(quote) => vec![
                ticker.to_string(),
                quote.name,
                texts.marker(quote.status.state).to_string(),
                texts.price_phrase(quote.price.as_ref()),
            ],
            Err(e) => vec![
                ticker.to_string(),
                e.user_message(ticker, locale),
                String::new(),
                String::new(),
            ],
        };
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cash_market::{MarketError, Price, Section, TradingStatus};

    /// SBER trades; everything else has no market data
    struct OneStock;

    #[async_trait]
    impl MarketData for OneStock {
        async fn fetch_trading_status(&self, ticker: &Ticker) -> cash_market::Result<TradingStatus> {
            if ticker.as_str() == "SBER" {
                Ok(TradingStatus::from_code(Some("T"), "N"))
            } else {
                Err(MarketError::NotFound {
                    ticker: ticker.to_string(),
                    section: Section::MarketData,
                })
            }
        }

        async fn fetch_last_price(&self, _: &Ticker) -> cash_market::Result<Price> {
            Ok(Price::new(250.5))
        }

        async fn fetch_close_price(&self, _: &Ticker) -> cash_market::Result<Price> {
            Ok(Price::new(249.0))
        }

        async fn fetch_company_name(&self, _: &Ticker) -> cash_market::Result<String> {
            Ok("Сбербанк".to_string())
        }
    }

    #[test]
    fn test_args_normalize_tickers() {
        let args = Args::try_parse_from(["cash-cli", "sber", " gazp "]).unwrap();
        assert_eq!(
            args.tickers,
            vec![Ticker::parse("SBER").unwrap(), Ticker::parse("GAZP").unwrap()]
        );
        assert_eq!(args.locale, Locale::Russian);
        assert_eq!(args.output, Output::Table);
        assert_eq!(args.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_args_log_format() {
        let args = Args::try_parse_from(["cash-cli", "--log-format", "json", "sber"]).unwrap();
        assert_eq!(args.log_format, LogFormat::Json);
        assert!(Args::try_parse_from(["cash-cli", "--log-format", "yaml", "sber"]).is_err());
    }

    #[test]
    fn test_args_require_ticker() {
        assert!(Args::try_parse_from(["cash-cli"]).is_err());
        assert!(Args::try_parse_from(["cash-cli", "  "]).is_err());
    }

    #[tokio::test]
    async fn test_quote_table_rows() {
        let tickers = vec![Ticker::parse("sber").unwrap(), Ticker::parse("xxxx").unwrap()];
        let table = quote_table(&OneStock, &tickers, Locale::English).await;

        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("250.5"));
        assert!(rendered.contains("open 👍"));
        assert!(rendered.contains("XXXX"));
    }
}

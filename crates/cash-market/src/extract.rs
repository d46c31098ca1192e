//! Column lookups over an ISS security document
//!
//! All lookups share one scan: validate the section, resolve the value and
//! `BOARDID` columns, then take the first row (in payload order) on an
//! accepted board. Price and name lookups skip rows whose cell is null.

use crate::error::{MarketError, Result};
use crate::quote::{Price, TradingStatus};
use crate::table::{Section, SecurityDocument, Table, columns};
use crate::ticker::Ticker;
use serde_json::Value;

/// Resolved position of a lookup inside a section
struct Located<'a> {
    table: &'a Table,
    board_index: usize,
    value_index: usize,
}

fn locate<'a>(
    doc: &'a SecurityDocument,
    ticker: &Ticker,
    section: Section,
    column: &'static str,
) -> Result<Located<'a>> {
    let table = doc.section(section);
    if table.is_empty() {
        return Err(MarketError::NotFound {
            ticker: ticker.to_string(),
            section,
        });
    }

    let schema_error = |column| MarketError::Schema {
        ticker: ticker.to_string(),
        section,
        column,
    };
    let value_index = table.column(column).ok_or_else(|| schema_error(column))?;
    let board_index = table
        .column(columns::BOARDID)
        .ok_or_else(|| schema_error(columns::BOARDID))?;

    Ok(Located {
        table,
        board_index,
        value_index,
    })
}

/// `TRADINGSTATUS` of the first row on one of `boards`
pub fn trading_status(
    doc: &SecurityDocument,
    ticker: &Ticker,
    boards: &[String],
    closed_code: &str,
) -> Result<TradingStatus> {
    let located = locate(doc, ticker, Section::MarketData, columns::TRADINGSTATUS)?;

    located
        .table
        .rows_on_boards(located.board_index, boards)
        .find_map(|row| row.get(located.value_index))
        .map(|cell| TradingStatus::from_code(cell.as_str(), closed_code))
        .ok_or_else(|| MarketError::NoMatchingBoard {
            ticker: ticker.to_string(),
            boards: boards.to_vec(),
        })
}

/// `LAST` of the first row on one of `boards` with a non-null value
pub fn last_price(doc: &SecurityDocument, ticker: &Ticker, boards: &[String]) -> Result<Price> {
    price(doc, ticker, boards, columns::LAST)
}

/// `CLOSEPRICE` of the first row on one of `boards` with a non-null value
pub fn close_price(doc: &SecurityDocument, ticker: &Ticker, boards: &[String]) -> Result<Price> {
    price(doc, ticker, boards, columns::CLOSEPRICE)
}

fn price(
    doc: &SecurityDocument,
    ticker: &Ticker,
    boards: &[String],
    column: &'static str,
) -> Result<Price> {
    let located = locate(doc, ticker, Section::MarketData, column)?;

    located
        .table
        .rows_on_boards(located.board_index, boards)
        .find_map(|row| row.get(located.value_index).and_then(Value::as_f64))
        .map(Price::new)
        .ok_or_else(|| MarketError::PriceUnavailable {
            ticker: ticker.to_string(),
            field: column,
        })
}

/// `SHORTNAME` from the `securities` section
pub fn company_name(doc: &SecurityDocument, ticker: &Ticker, boards: &[String]) -> Result<String> {
    let located = locate(doc, ticker, Section::Securities, columns::SHORTNAME)?;

    located
        .table
        .rows_on_boards(located.board_index, boards)
        .find_map(|row| {
            row.get(located.value_index)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
        })
        .map(str::to_string)
        .ok_or_else(|| MarketError::NameUnavailable {
            ticker: ticker.to_string(),
        })
}

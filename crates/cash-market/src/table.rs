//! ISS tabular payloads
//!
//! Every ISS section is serialized as a header plus rows of positional cells:
//!
//! ```json
//! { "marketdata": { "columns": ["SECID", "BOARDID", "LAST"], "data": [["SBER", "TQBR", 250.5]] } }
//! ```
//!
//! Only the sections this crate reads are modelled; anything else in the
//! document (metadata, `dataversion`, ...) is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Column names used by the lookups
pub mod columns {
    pub const BOARDID: &str = "BOARDID";
    pub const TRADINGSTATUS: &str = "TRADINGSTATUS";
    pub const LAST: &str = "LAST";
    pub const CLOSEPRICE: &str = "CLOSEPRICE";
    pub const SHORTNAME: &str = "SHORTNAME";
}

/// Sections of the `securities/{TICKER}.json` document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Live trading data per board
    MarketData,
    /// Static security description per board
    Securities,
}

impl Section {
    /// Key of the section in the JSON document
    pub fn key(self) -> &'static str {
        match self {
            Section::MarketData => "marketdata",
            Section::Securities => "securities",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One tabular section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

impl Table {
    /// Whether the section has no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of a column in the header
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Rows whose board column holds one of `boards`, in payload order
    pub fn rows_on_boards<'a>(
        &'a self,
        board_index: usize,
        boards: &'a [String],
    ) -> impl Iterator<Item = &'a [Value]> + 'a {
        self.data.iter().map(Vec::as_slice).filter(move |row| {
            row.get(board_index)
                .and_then(Value::as_str)
                .is_some_and(|board| boards.iter().any(|b| b == board))
        })
    }
}

/// The parts of `securities/{TICKER}.json` used by the bot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityDocument {
    #[serde(default)]
    pub marketdata: Table,
    #[serde(default)]
    pub securities: Table,
}

impl SecurityDocument {
    pub fn section(&self, section: Section) -> &Table {
        match section {
            Section::MarketData => &self.marketdata,
            Section::Securities => &self.securities,
        }
    }
}

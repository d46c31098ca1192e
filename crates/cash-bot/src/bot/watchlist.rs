//! Ordered watch-list of tickers

use cash_market::Ticker;

/// Ordered, duplicate-free list of tickers
///
/// Insertion order is kept; removal keeps the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    tickers: Vec<Ticker>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ticker; returns false if it is already listed
    pub fn add(&mut self, ticker: Ticker) -> bool {
        if self.contains(&ticker) {
            return false;
        }
        self.tickers.push(ticker);
        true
    }

    /// Remove a ticker; returns false if it was not listed
    pub fn remove(&mut self, ticker: &Ticker) -> bool {
        match self.tickers.iter().position(|t| t == ticker) {
            Some(index) => {
                self.tickers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.tickers.contains(ticker)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticker> {
        self.tickers.iter()
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Copy of the tickers in order
    pub fn to_vec(&self) -> Vec<Ticker> {
        self.tickers.clone()
    }
}

impl FromIterator<Ticker> for Watchlist {
    fn from_iter<I: IntoIterator<Item = Ticker>>(iter: I) -> Self {
        let mut list = Watchlist::new();
        for ticker in iter {
            list.add(ticker);
        }
        list
    }
}

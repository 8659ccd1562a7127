//! Fixed sector classification.

use std::collections::HashMap;

use dynalpha_primitives::{SectorLabel, Symbol};
use dynalpha_traits::SectorSource;

const TECH_STOCKS: &[&str] =
    &["AAPL", "MSFT", "GOOGL", "META", "NVDA", "AMD", "INTC", "CRM", "ADBE", "ORCL"];
const HEALTHCARE_STOCKS: &[&str] =
    &["JNJ", "UNH", "PFE", "MRK", "ABBV", "TMO", "ABT", "LLY", "BMY", "AMGN"];
const FINANCE_STOCKS: &[&str] =
    &["JPM", "BAC", "WFC", "GS", "MS", "C", "BLK", "SCHW", "AXP", "USB"];

/// Sector lookup backed by an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticSectorMap {
    sectors: HashMap<Symbol, String>,
    order: Vec<Symbol>,
}

impl StaticSectorMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Thirty large caps across technology, healthcare and finance.
    #[must_use]
    pub fn reference_universe() -> Self {
        [
            (TECH_STOCKS, "Technology"),
            (HEALTHCARE_STOCKS, "Healthcare"),
            (FINANCE_STOCKS, "Finance"),
        ]
        .into_iter()
        .flat_map(|(symbols, sector)| symbols.iter().map(move |s| (Symbol::new(*s), sector)))
        .collect()
    }

    /// Assign a sector to a symbol, replacing any previous assignment.
    ///
    /// Blank and `"unknown"` sectors resolve as unresolved on lookup.
    pub fn insert(&mut self, symbol: Symbol, sector: impl Into<String>) {
        if !self.sectors.contains_key(&symbol) {
            self.order.push(symbol.clone());
        }
        self.sectors.insert(symbol, sector.into());
    }

    /// Symbols in first-insertion order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.order
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl SectorSource for StaticSectorMap {
    fn sector(&self, symbol: &Symbol) -> SectorLabel {
        SectorLabel::parse(self.sectors.get(symbol).map(String::as_str))
    }
}

impl<S: Into<String>> FromIterator<(Symbol, S)> for StaticSectorMap {
    fn from_iter<I: IntoIterator<Item = (Symbol, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (symbol, sector) in iter {
            map.insert(symbol, sector);
        }
        map
    }
}

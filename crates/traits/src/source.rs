//! External metadata lookups.

use dynalpha_primitives::{Instrument, SectorLabel, Symbol};

/// Resolves sector metadata for instruments.
///
/// Sector lookup is independent of price retrieval: a symbol the source
/// cannot classify resolves to [`SectorLabel::Unresolved`] rather than
/// failing.
pub trait SectorSource: Send + Sync {
    /// Sector label for a symbol.
    fn sector(&self, symbol: &Symbol) -> SectorLabel;

    /// Attach sector labels to a list of symbols, preserving order.
    fn classify(&self, symbols: &[Symbol]) -> Vec<Instrument> {
        symbols.iter().map(|s| Instrument::new(s.clone(), self.sector(s))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl SectorSource for Fixed {
        fn sector(&self, symbol: &Symbol) -> SectorLabel {
            SectorLabel::parse((symbol.as_str() == "AAPL").then_some("Technology"))
        }
    }

    #[test]
    fn classify_preserves_order_and_unresolved() {
        let instruments = Fixed.classify(&[Symbol::new("ZZZ"), Symbol::new("AAPL")]);
        assert_eq!(instruments[0].symbol.as_str(), "ZZZ");
        assert_eq!(instruments[0].sector, SectorLabel::Unresolved);
        assert_eq!(instruments[1].sector.as_resolved(), Some("Technology"));
    }
}

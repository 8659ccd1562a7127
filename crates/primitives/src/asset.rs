//! Instrument type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Stock ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Sector classification of an instrument.
///
/// Sector metadata comes from a separate lookup than prices and may be
/// missing. Instruments with an [`SectorLabel::Unresolved`] sector take part
/// in factor computation but are dropped before score aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SectorLabel {
    /// A known sector name.
    Resolved(String),
    /// Sector metadata was missing or unusable.
    #[default]
    Unresolved,
}

impl SectorLabel {
    /// Sentinel some providers return in place of a sector name.
    pub const UNKNOWN: &'static str = "unknown";

    /// Interpret a raw provider label.
    ///
    /// `None`, blank strings and the `"unknown"` sentinel (any case) are
    /// unresolved.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() && !s.eq_ignore_ascii_case(Self::UNKNOWN) => {
                Self::Resolved(s.to_string())
            }
            _ => Self::Unresolved,
        }
    }

    /// The sector name, if resolved.
    #[must_use]
    pub fn as_resolved(&self) -> Option<&str> {
        match self {
            Self::Resolved(name) => Some(name),
            Self::Unresolved => None,
        }
    }

    /// Whether a sector name is known.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl std::fmt::Display for SectorLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(name) => f.write_str(name),
            Self::Unresolved => f.write_str(Self::UNKNOWN),
        }
    }
}

impl From<Option<String>> for SectorLabel {
    fn from(raw: Option<String>) -> Self {
        Self::parse(raw.as_deref())
    }
}

/// A candidate instrument with its sector metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Sector classification.
    pub sector: SectorLabel,
}

impl Instrument {
    /// Create a new instrument.
    #[must_use]
    pub const fn new(symbol: Symbol, sector: SectorLabel) -> Self {
        Self { symbol, sector }
    }

    /// Create an instrument whose sector is not known.
    #[must_use]
    pub const fn unclassified(symbol: Symbol) -> Self {
        Self { symbol, sector: SectorLabel::Unresolved }
    }
}

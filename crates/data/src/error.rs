//! Error types for data acquisition.

/// Errors that can occur while fetching market data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Yahoo Finance API error.
    #[error("yahoo finance api error: {0}")]
    YahooApi(String),

    /// The provider answered but had nothing usable.
    #[error("missing data for {symbol}: {reason}")]
    MissingData {
        /// Symbol that was queried.
        symbol: String,
        /// Reason for missing data.
        reason: String,
    },

    /// Time conversion error.
    #[error("time conversion error: {0}")]
    TimeConversion(String),

    /// Invalid symbol.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),
}

impl DataError {
    /// Returns whether other symbols can still be fetched after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::TimeConversion(_))
    }
}

impl From<yahoo_finance_api::YahooError> for DataError {
    fn from(err: yahoo_finance_api::YahooError) -> Self {
        Self::YahooApi(err.to_string())
    }
}

//! Monthly bars from Yahoo Finance.

use std::time::Duration;

use chrono::DateTime;
use dynalpha_primitives::{Observation, Period, Symbol};
use time::OffsetDateTime;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

use crate::DataError;

/// Months of history fetched per symbol by default.
pub const DEFAULT_TRAILING_MONTHS: u32 = 14;

/// Observations for one symbol, or why they could not be fetched.
pub type FetchResult = Result<Vec<Observation>, DataError>;

/// Yahoo Finance source of monthly closing prices.
pub struct YahooMonthlySource {
    connector: yahoo::YahooConnector,
    trailing_months: u32,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooMonthlySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooMonthlySource")
            .field("trailing_months", &self.trailing_months)
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooMonthlySource {
    /// Create a source covering the trailing `trailing_months` months.
    ///
    /// # Errors
    /// Returns `DataError::YahooApi` if the HTTP client cannot be built.
    pub fn new(trailing_months: u32) -> Result<Self, DataError> {
        Ok(Self {
            connector: yahoo::YahooConnector::new()?,
            trailing_months,
            rate_limit_delay: Duration::from_millis(250),
        })
    }

    /// Set the pause between consecutive symbol requests.
    #[must_use]
    pub const fn with_rate_limit(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Months of history requested per symbol.
    #[must_use]
    pub const fn trailing_months(&self) -> u32 {
        self.trailing_months
    }

    /// Fetch monthly adjusted closes for one symbol.
    ///
    /// # Errors
    /// Returns `DataError::YahooApi` on request failure and
    /// `DataError::MissingData` when no usable bar comes back.
    pub async fn fetch(&self, symbol: &Symbol) -> FetchResult {
        if symbol.as_str().trim().is_empty() {
            return Err(DataError::InvalidSymbol("empty symbol".to_string()));
        }

        let end = OffsetDateTime::now_utc();
        let start = end - time::Duration::days(31 * i64::from(self.trailing_months));

        let response = self
            .connector
            .get_quote_history_interval(symbol.as_str(), start, end, "1mo")
            .await?;
        let quotes = response.quotes()?;

        let bars = quotes.iter().map(|q| (q.timestamp, q.adjclose));
        let observations = observations_from_bars(bars)?;
        if observations.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "no monthly bars returned".to_string(),
            });
        }
        Ok(observations)
    }

    /// Fetch every symbol in turn, keeping each outcome.
    ///
    /// A failed symbol is logged and reported in place; the remaining
    /// symbols are still fetched.
    pub async fn fetch_universe(&self, symbols: &[Symbol]) -> Vec<(Symbol, FetchResult)> {
        let mut results = Vec::with_capacity(symbols.len());
        for (i, symbol) in symbols.iter().enumerate() {
            if i > 0 && !self.rate_limit_delay.is_zero() {
                sleep(self.rate_limit_delay).await;
            }

            let result = self.fetch(symbol).await;
            match &result {
                Ok(observations) => {
                    tracing::debug!(symbol = %symbol, bars = observations.len(), "fetched");
                }
                Err(err) => tracing::warn!(symbol = %symbol, error = %err, "fetch failed"),
            }
            results.push((symbol.clone(), result));
        }

        let loaded = results.iter().filter(|(_, r)| r.is_ok()).count();
        tracing::info!(requested = symbols.len(), loaded, "universe fetch complete");
        results
    }
}

/// Convert `(unix timestamp, close)` bars into monthly observations.
///
/// Each bar is assigned to the UTC calendar month of its timestamp.
///
/// # Errors
/// Returns `DataError::TimeConversion` for a timestamp outside the
/// representable range.
pub fn observations_from_bars(
    bars: impl IntoIterator<Item = (i64, f64)>,
) -> Result<Vec<Observation>, DataError> {
    bars.into_iter()
        .map(|(timestamp, close)| {
            let date = DateTime::from_timestamp(timestamp, 0)
                .ok_or_else(|| DataError::TimeConversion(format!("timestamp {timestamp}")))?
                .date_naive();
            Ok(Observation::new(Period::from_date(date), close))
        })
        .collect()
}

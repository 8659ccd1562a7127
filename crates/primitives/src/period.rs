//! Calendar month periods.

use std::{fmt, str::FromStr};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Errors raised when constructing or parsing a [`Period`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Month outside `1..=12`.
    #[error("invalid month {0} (must be in 1..=12)")]
    InvalidMonth(u32),

    /// Unparseable period string.
    #[error("cannot parse period from {0:?} (expected YYYY-MM or YYYY-MM-DD)")]
    Parse(String),
}

/// A calendar month, the unit of observation for monthly price series.
///
/// Ordering is chronological. Displays and parses as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period from a year and a 1-based month.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidMonth` if `month` is not in `1..=12`.
    pub const fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if month == 0 || month > 12 {
            return Err(PeriodError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing `date`.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month (1-based).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The following month.
    #[must_use]
    pub const fn succ(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// The preceding month.
    #[must_use]
    pub const fn pred(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Signed number of months from `self` to `other`.
    #[must_use]
    pub const fn months_between(&self, other: &Self) -> i64 {
        other.ordinal() - self.ordinal()
    }

    const fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = Date::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::from_date(date));
        }

        let (year, month) = s.split_once('-').ok_or_else(|| PeriodError::Parse(s.to_string()))?;
        let year = year.parse::<i32>().map_err(|_| PeriodError::Parse(s.to_string()))?;
        let month = month.parse::<u32>().map_err(|_| PeriodError::Parse(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl From<Date> for Period {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

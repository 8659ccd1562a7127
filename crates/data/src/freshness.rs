//! Monthly data freshness check.

use dynalpha_primitives::{Date, Period};

/// Whether the latest data covers the current calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Latest period is the current month.
    Current,
    /// Latest period lags the current month.
    Stale {
        /// Most recent period with data.
        latest: Period,
        /// Month of `today`.
        current: Period,
    },
    /// No data at all.
    NoData,
}

impl Freshness {
    /// Check if the data is current.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Stale { latest, current } => {
                write!(f, "stale (latest {latest}, current {current})")
            }
            Self::NoData => write!(f, "no data"),
        }
    }
}

/// Compare the most recent period of a series with the month of `today`.
///
/// Data from a later month than `today` counts as current.
#[must_use]
pub fn check_freshness(latest: Option<Period>, today: Date) -> Freshness {
    let current = Period::from_date(today);
    match latest {
        None => Freshness::NoData,
        Some(latest) if latest >= current => Freshness::Current,
        Some(latest) => Freshness::Stale { latest, current },
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2024-05", date(2024, 5, 1))]
    #[case("2024-05", date(2024, 5, 31))]
    #[case("2024-06", date(2024, 5, 31))]
    fn same_month_is_current(#[case] latest: &str, #[case] today: Date) {
        let freshness = check_freshness(Some(latest.parse().unwrap()), today);
        assert!(freshness.is_current());
    }

    #[test]
    fn earlier_month_is_stale() {
        let latest: Period = "2023-12".parse().unwrap();
        let freshness = check_freshness(Some(latest), date(2024, 1, 2));

        assert_eq!(
            freshness,
            Freshness::Stale { latest, current: "2024-01".parse().unwrap() }
        );
        assert_eq!(freshness.to_string(), "stale (latest 2023-12, current 2024-01)");
    }

    #[test]
    fn missing_series_has_no_data() {
        assert_eq!(check_freshness(None, date(2024, 1, 2)), Freshness::NoData);
    }
}

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod yahoo;
pub use yahoo::{DEFAULT_TRAILING_MONTHS, FetchResult, YahooMonthlySource, observations_from_bars};

mod sectors;
pub use sectors::StaticSectorMap;

mod freshness;
pub use freshness::{Freshness, check_freshness};

mod error;
pub use error::DataError;

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::{Instrument, SectorLabel, Symbol};

mod period;
pub use period::{Period, PeriodError};

mod series;
pub use series::{Observation, TimeSeries};

mod returns;
pub use returns::{ReturnRow, ReturnSeries};

mod scores;
pub use scores::{FactorRow, InstrumentFactors, InstrumentScore, SectorRanking};

mod weights;
pub use weights::LagWeights;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod momentum;
pub use momentum::{ThreeMonthReturn, ThreeMonthReturnConfig};

mod market;
pub use market::{WeightedMarketReturn, WeightedMarketReturnConfig};

mod beta;
pub use beta::{RollingBeta, RollingBetaConfig};

#[cfg(test)]
mod testing;

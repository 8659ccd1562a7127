#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod rank;
pub use rank::{DEFAULT_TOP_N, rank_sectors};

mod frame;
pub use frame::{factors_frame, observations_from_frame, rankings_frame};

mod error;
pub use error::UtilsError;

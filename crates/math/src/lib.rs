#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod stats;
pub use stats::{VARIANCE_EPSILON, beta, sample_covariance, sample_mean, sample_variance};

mod weights;
pub use weights::weighted_sum;

mod error;
pub use error::MathError;

//! # dynalpha
//!
//! Dynamic alpha model: ranks equities within sectors by a composite score
//! of short-horizon momentum, lagged market returns and trailing beta,
//! computed from monthly closing prices.
//!
//! This crate provides a unified interface to the dynalpha workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all pipeline components
//! - `primitives`: Core type definitions
//! - `traits`: Factor and sector-source abstractions
//! - `math`: Sample statistics
//! - `factors`: Rolling factor calculators
//! - `model`: Return engine, scorer and pipeline
//! - `utils`: Sector ranking and DataFrame conversion
//! - `data`: Yahoo Finance, sector map and freshness adapters
//! - `cli`: Settings loader and the `dam` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use dynalpha::model::{DamPipeline, PriceStore};
//!
//! let output = DamPipeline::new().run(&store, &benchmark, &instruments);
//! for ranking in &output.rankings {
//!     println!("{}: {}", ranking.sector, ranking.top().symbol);
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use dynalpha_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use dynalpha_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use dynalpha_math as math;
#[cfg(feature = "factors")]
#[doc(inline)]
pub use dynalpha_factors as factors;
#[cfg(feature = "model")]
#[doc(inline)]
pub use dynalpha_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use dynalpha_utils as utils;
#[cfg(feature = "data")]
#[doc(inline)]
pub use dynalpha_data as data;

#[cfg(feature = "cli")]
pub mod settings;

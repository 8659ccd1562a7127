#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dynalpha/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod store;
pub use store::PriceStore;

mod returns;
pub use returns::ReturnEngine;

mod benchmark;
pub use benchmark::BenchmarkMapper;

mod scorer;
pub use scorer::Scorer;

mod config;
pub use config::{ModelConfig, ScoringPolicy};

mod pipeline;
pub use pipeline::{DamPipeline, PipelineOutput, SkippedInstrument};

mod error;
pub use error::{ModelError, SkipReason};

/// Re-export commonly used types.
pub mod prelude {
    pub use dynalpha_traits::{ConfigurableFactor, RollingFactor};

    pub use super::{DamPipeline, ModelConfig, ModelError, PriceStore, ScoringPolicy};
}

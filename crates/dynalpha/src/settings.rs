//! Runtime settings for the `dam` binary.
//!
//! Settings are read from an optional TOML file and `DAM_`-prefixed
//! environment variables, e.g. `DAM_MODEL__TOP_N=3` or
//! `DAM_DATA__BENCHMARK=IVV`. Anything not given keeps its default.

use std::path::Path;

use dynalpha_data::{DEFAULT_TRAILING_MONTHS, StaticSectorMap};
use dynalpha_model::{ModelConfig, ModelError};
use dynalpha_primitives::Symbol;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "dam.toml";

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// Model section failed validation.
    #[error("invalid model settings: {0}")]
    Invalid(#[from] ModelError),
}

/// One instrument of a configured universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseEntry {
    /// Ticker symbol.
    pub symbol: String,
    /// Sector name; omitted or `"unknown"` leaves the instrument unclassified.
    #[serde(default)]
    pub sector: Option<String>,
}

/// Data acquisition settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Benchmark symbol.
    pub benchmark: String,
    /// Months of history fetched per symbol.
    pub trailing_months: u32,
    /// Symbol checked for freshness; the benchmark when unset.
    pub probe: Option<String>,
    /// Instruments to score; the built-in reference universe when empty.
    pub universe: Vec<UniverseEntry>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            benchmark: "SPY".to_string(),
            trailing_months: DEFAULT_TRAILING_MONTHS,
            probe: None,
            universe: Vec::new(),
        }
    }
}

impl DataSettings {
    /// Benchmark symbol.
    #[must_use]
    pub fn benchmark_symbol(&self) -> Symbol {
        Symbol::new(self.benchmark.trim().to_uppercase())
    }

    /// Symbol whose latest period decides freshness.
    #[must_use]
    pub fn probe_symbol(&self) -> Symbol {
        self.probe
            .as_deref()
            .map_or_else(|| self.benchmark_symbol(), |p| Symbol::new(p.trim().to_uppercase()))
    }

    /// Sector lookup for the configured universe.
    #[must_use]
    pub fn sector_map(&self) -> StaticSectorMap {
        if self.universe.is_empty() {
            return StaticSectorMap::reference_universe();
        }
        self.universe
            .iter()
            .map(|e| {
                let sector = e.sector.clone().unwrap_or_default();
                (Symbol::new(e.symbol.trim().to_uppercase()), sector)
            })
            .collect()
    }
}

/// Complete settings for a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Model parameters.
    pub model: ModelConfig,
    /// Data acquisition parameters.
    pub data: DataSettings,
}

impl Settings {
    /// Parse settings from TOML text, without environment overrides.
    ///
    /// # Errors
    /// Returns `SettingsError` if the text does not parse or the model
    /// section is invalid.
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        finish(builder)
    }
}

/// Load settings from `path`, or from `dam.toml` in the working directory
/// if it exists, then apply `DAM_` environment overrides.
///
/// # Errors
/// Returns `SettingsError::Load` if an explicit file is missing or any
/// source fails to parse, and `SettingsError::Invalid` if the model
/// section fails validation.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_SETTINGS_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("DAM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    finish(builder)
}

fn finish(builder: config::Config) -> Result<Settings, SettingsError> {
    let settings = builder.try_deserialize::<Settings>()?;
    settings.model.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynalpha_model::ScoringPolicy;
    use dynalpha_traits::SectorSource;

    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.data.benchmark_symbol().as_str(), "SPY");
        assert_eq!(settings.data.probe_symbol().as_str(), "SPY");
        assert_eq!(settings.data.sector_map().len(), 30);
    }

    #[test]
    fn sections_override_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [model]
            risk_free_rate_annual = 0.05
            scoring = "propagate_unavailable"
            top_n = 3

            [data]
            benchmark = "ivv"
            probe = "AAPL"

            [[data.universe]]
            symbol = "xom"
            sector = "Energy"

            [[data.universe]]
            symbol = "ZZZ"
            "#,
        )
        .unwrap();

        assert_relative_eq!(settings.model.risk_free_rate_annual, 0.05);
        assert_eq!(settings.model.scoring, ScoringPolicy::PropagateUnavailable);
        assert_eq!(settings.model.top_n, 3);
        assert_eq!(settings.model.beta_window, 12);
        assert_eq!(settings.data.benchmark_symbol().as_str(), "IVV");
        assert_eq!(settings.data.probe_symbol().as_str(), "AAPL");

        let map = settings.data.sector_map();
        assert_eq!(map.sector(&Symbol::new("XOM")).as_resolved(), Some("Energy"));
        assert!(!map.sector(&Symbol::new("ZZZ")).is_resolved());
    }

    #[test]
    fn invalid_model_section_rejected() {
        let result = Settings::from_toml_str("[model]\nweights = [0.5, 0.5]\n");
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn malformed_text_rejected() {
        let result = Settings::from_toml_str("[model\n");
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }
}

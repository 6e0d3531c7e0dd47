//! # stride-config
//!
//! Layered configuration loading for stride using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STRIDE_*` prefix, `__` as separator)
//! 2. Project-level `.stride/config.toml`
//! 3. User-level `~/.config/stride/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STRIDE_SORT__STRATEGY` -> `sort.strategy`,
//! `STRIDE_BENCH__ROUNDS` -> `bench.rounds`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use stride_config::StrideConfig;
//!
//! let config = StrideConfig::load_with_dotenv().expect("config");
//! println!("default strategy: {}", config.sort.strategy);
//! ```

mod bench;
mod error;
mod output;
mod search;
mod sort;

pub use bench::{BenchConfig, MIN_CHART_WIDTH};
pub use error::ConfigError;
pub use output::OutputConfig;
pub use search::SearchConfig;
pub use sort::SortConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StrideConfig {
    #[serde(default)]
    pub sort: SortConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub bench: BenchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl StrideConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".stride/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("STRIDE_").split("__"))
    }

    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bench.chart_width < MIN_CHART_WIDTH {
            return Err(ConfigError::InvalidValue {
                field: "bench.chart_width".into(),
                reason: format!("must be at least {MIN_CHART_WIDTH}"),
            });
        }
        if self.output.save && self.output.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.path".into(),
                reason: "must not be empty when output.save is enabled".into(),
            });
        }
        if self.search.min_energy.is_some_and(f64::is_nan) {
            return Err(ConfigError::InvalidValue {
                field: "search.min_energy".into(),
                reason: "must be a number".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stride").join("config.toml"))
    }
}

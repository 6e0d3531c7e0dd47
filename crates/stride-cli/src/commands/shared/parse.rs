use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use stride_config::StrideConfig;
use stride_core::enums::SortStrategy;
use stride_core::record::parse_threshold;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// `--strategy` if given, otherwise `sort.strategy` from config.
pub fn resolve_strategy(raw: Option<&str>, config: &StrideConfig) -> anyhow::Result<SortStrategy> {
    raw.map_or(Ok(config.sort.strategy), |raw| parse_enum(raw, "strategy"))
}

/// `--min-energy` if given, otherwise `search.min_energy` from config.
pub fn resolve_threshold(raw: Option<&str>, fallback: Option<f64>) -> anyhow::Result<Option<f64>> {
    match raw {
        Some(raw) => Ok(Some(parse_threshold(raw)?)),
        None => Ok(fallback),
    }
}

/// Where sorted output goes, or `None` when saving is turned off.
pub fn resolve_output(
    explicit: Option<&Path>,
    no_save: bool,
    config: &StrideConfig,
) -> Option<PathBuf> {
    if no_save {
        return None;
    }
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if config.output.save => Some(PathBuf::from(&config.output.path)),
        None => None,
    }
}

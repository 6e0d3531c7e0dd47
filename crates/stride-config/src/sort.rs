//! Sorting defaults.

use serde::{Deserialize, Serialize};
use stride_core::enums::SortStrategy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SortConfig {
    /// Strategy used when a command does not pass `--strategy`.
    #[serde(default)]
    pub strategy: SortStrategy,
}

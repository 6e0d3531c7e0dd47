//! Search defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Minimum energy threshold applied by `stride run` when none is given.
    #[serde(default)]
    pub min_energy: Option<f64>,
}

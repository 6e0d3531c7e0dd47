//! Persistence of sorted output.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "sorted_sessions.csv".to_string()
}

const fn default_save() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where sorted sessions are written.
    #[serde(default = "default_path")]
    pub path: String,

    /// Whether sorting commands write the output file at all.
    #[serde(default = "default_save")]
    pub save: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            save: default_save(),
        }
    }
}

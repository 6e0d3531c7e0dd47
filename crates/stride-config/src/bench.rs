//! Timing harness and chart settings.

use serde::{Deserialize, Serialize};

const fn default_rounds() -> u32 {
    1
}

const fn default_chart_width() -> usize {
    40
}

/// Narrowest bar chart that still leaves room for a visible bar.
pub const MIN_CHART_WIDTH: usize = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BenchConfig {
    /// Times each strategy is run; the report keeps best and mean.
    #[serde(default = "default_rounds")]
    pub rounds: u32,

    /// Width in characters of the longest bar.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            chart_width: default_chart_width(),
        }
    }
}

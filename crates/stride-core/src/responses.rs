//! Response types returned by `stride` commands.
//!
//! These structs define the shape of JSON output for `stride sort`,
//! `stride search`, `stride bench` and `stride run`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::SessionRow;
use crate::enums::SortStrategy;

/// Response from `stride sort`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SortResponse {
    pub strategy: SortStrategy,
    pub sessions: Vec<SessionRow>,
    pub skipped_rows: usize,
}

/// Response from `stride search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub min_energy: f64,
    pub searched: usize,
    pub matches: Vec<SessionRow>,
}

/// Elapsed time of one ordering strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyTiming {
    pub label: String,
    /// Fastest round, in seconds.
    pub best_secs: f64,
    /// Mean over all rounds, in seconds.
    pub mean_secs: f64,
}

/// Response from `stride bench`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingReport {
    pub measured_at: DateTime<Utc>,
    pub input_len: usize,
    pub rounds: u32,
    pub timings: Vec<StrategyTiming>,
}

impl TimingReport {
    /// Timing for the strategy with `label`, if it was measured.
    #[must_use]
    pub fn timing(&self, label: &str) -> Option<&StrategyTiming> {
        self.timings.iter().find(|t| t.label == label)
    }
}

/// Response from `stride run`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchResponse {
    pub sorted: SortResponse,
    pub timing: TimingReport,
    pub search: Option<SearchResponse>,
    pub saved_to: Option<String>,
}

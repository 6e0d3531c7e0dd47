//! Store error types for stride-store.

use std::path::PathBuf;

/// Errors that abort a whole load or save. Per-row problems are reported in
/// [`LoadReport::skipped`](crate::LoadReport) instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column (under any accepted name).
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A required column appears more than once, possibly under an alias.
    #[error("column '{column}' given twice, as '{first}' and '{second}'")]
    DuplicateColumn {
        column: &'static str,
        first: String,
        second: String,
    },
}

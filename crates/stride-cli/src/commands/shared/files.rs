use std::path::Path;

use anyhow::Context;
use stride_core::entities::Session;
use stride_store::{LoadReport, load_sessions, save_sessions};

use crate::ui;

/// Load an input file, reporting skipped rows on stderr.
pub fn load_input(path: &Path) -> anyhow::Result<LoadReport> {
    let report = load_sessions(path)
        .with_context(|| format!("failed to load sessions from {}", path.display()))?;

    if !report.skipped.is_empty() {
        ui::status(&format!(
            "skipped {} malformed row(s) in {}",
            report.skipped.len(),
            path.display()
        ));
    }
    Ok(report)
}

/// Write ordered sessions to `path`.
pub fn save_ordered(path: &Path, sorted: &[&Session]) -> anyhow::Result<()> {
    save_sessions(path, sorted)
        .with_context(|| format!("failed to save sessions to {}", path.display()))?;
    ui::status(&format!("saved {} session(s) to {}", sorted.len(), path.display()));
    Ok(())
}

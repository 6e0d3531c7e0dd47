use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use stride_core::entities::Session;
use stride_core::record::RawSession;

use crate::error::StoreError;

/// Required columns, each with the names it may appear under.
const COLUMNS: [(&str, &[&str]); 6] = [
    ("owner", &["owner", "user"]),
    ("duration_minutes", &["duration_minutes", "duration"]),
    ("energy_burned", &["energy_burned", "calories"]),
    ("goal_met", &["goal_met", "met_goal"]),
    ("logged_streak", &["logged_streak", "logged_3days"]),
    ("predicate_expr", &["predicate_expr", "logic_expr"]),
];

/// A row that was dropped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub reason: String,
}

/// Result of loading a session file.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub sessions: Vec<Session>,
    pub skipped: Vec<SkippedRow>,
}

/// Load sessions from a CSV file at `path`.
pub fn load_sessions(path: &Path) -> Result<LoadReport, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let report = read_sessions(file)?;

    tracing::debug!(
        path = %path.display(),
        loaded = report.sessions.len(),
        skipped = report.skipped.len(),
        "sessions loaded"
    );
    Ok(report)
}

/// Load sessions from any CSV source with a header row.
pub fn read_sessions<R: Read>(source: R) -> Result<LoadReport, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    check_columns(&headers)?;

    let mut report = LoadReport::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                let line = error.position().map_or(0, csv::Position::line);
                skip(&mut report, line, error.to_string());
                continue;
            }
        };

        let line = record.position().map_or(0, csv::Position::line);
        let session = record
            .deserialize::<RawSession>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(|raw| Session::try_from(raw).map_err(|e| e.to_string()));

        match session {
            Ok(session) => {
                if let Err(error) = session.validate_predicate() {
                    tracing::warn!(
                        line,
                        owner = session.owner(),
                        expr = session.predicate_expr(),
                        %error,
                        "malformed predicate; session will evaluate as false"
                    );
                }
                report.sessions.push(session);
            }
            Err(reason) => skip(&mut report, line, reason),
        }
    }

    Ok(report)
}

/// Each required column must appear exactly once, under one of its names.
fn check_columns(headers: &csv::StringRecord) -> Result<(), StoreError> {
    for (canonical, names) in COLUMNS {
        let found: Vec<&str> = headers.iter().filter(|h| names.contains(h)).collect();
        match found.as_slice() {
            [] => return Err(StoreError::MissingColumn(canonical)),
            [_] => {}
            [first, second, ..] => {
                return Err(StoreError::DuplicateColumn {
                    column: canonical,
                    first: (*first).to_string(),
                    second: (*second).to_string(),
                });
            }
        }
    }
    Ok(())
}

fn skip(report: &mut LoadReport, line: u64, reason: String) {
    tracing::warn!(line, %reason, "skipping malformed row");
    report.skipped.push(SkippedRow { line, reason });
}

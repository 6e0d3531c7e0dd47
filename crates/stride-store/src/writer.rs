use std::io::Write;
use std::path::Path;

use stride_core::entities::Session;

use crate::error::StoreError;

/// Output columns, in the order they are written.
pub const HEADER: [&str; 7] = [
    "owner",
    "duration_minutes",
    "energy_burned",
    "goal_met",
    "logged_streak",
    "predicate_expr",
    "predicate_value",
];

/// Write `sessions` to a CSV file at `path`, replacing any existing file.
pub fn save_sessions<S: AsRef<Session>>(path: &Path, sessions: &[S]) -> Result<(), StoreError> {
    let file = std::fs::File::create(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_sessions(file, sessions)?;

    tracing::debug!(path = %path.display(), rows = sessions.len(), "sessions saved");
    Ok(())
}

/// Write a header plus one row per session to `sink`.
pub fn write_sessions<W: Write, S: AsRef<Session>>(
    sink: W,
    sessions: &[S],
) -> Result<(), StoreError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    wtr.write_record(HEADER)?;
    for session in sessions {
        wtr.serialize(session.as_ref().to_row())?;
    }

    wtr.flush()?;
    Ok(())
}

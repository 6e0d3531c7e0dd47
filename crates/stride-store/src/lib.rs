//! # stride-store
//!
//! Tabular persistence for sessions.
//!
//! Loading is forgiving: a row that fails to parse or coerce is skipped,
//! logged, and listed in the returned [`LoadReport`]; the remaining rows are
//! still loaded. Saving writes one row per session, with the predicate
//! evaluated at write time.

mod error;
mod reader;
mod writer;

pub use error::StoreError;
pub use reader::{LoadReport, SkippedRow, load_sessions, read_sessions};
pub use writer::{HEADER, save_sessions, write_sessions};

//! Sort strategy selection.
//!
//! Serialized as `snake_case`, matching how strategies are named in config
//! files and on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Ordering algorithm used to sort sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Stable O(n²) insertion pass.
    Insertion,
    /// O(n log n) divide-and-conquer merge.
    #[default]
    Merge,
}

impl SortStrategy {
    pub const ALL: [Self; 2] = [Self::Insertion, Self::Merge];

    /// Return the string representation used in config and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Merge => "merge",
        }
    }

    /// Human-facing label used in reports and charts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Insertion => "Insertion",
            Self::Merge => "Merge",
        }
    }

    /// Resolve a numbered menu answer (`1` = insertion, `2` = merge).
    pub fn from_menu_choice(raw: &str) -> Result<Self, CoreError> {
        match raw.trim() {
            "1" => Ok(Self::Insertion),
            "2" => Ok(Self::Merge),
            other => Err(CoreError::InvalidChoice {
                prompt: "sort strategy (expected 1 or 2)".into(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(Self::Insertion),
            "merge" => Ok(Self::Merge),
            other => Err(CoreError::InvalidChoice {
                prompt: "sort strategy (expected insertion or merge)".into(),
                value: other.to_string(),
            }),
        }
    }
}

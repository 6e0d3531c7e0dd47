//! Cross-cutting error types for stride.
//!
//! Storage and configuration errors live in their own crates; the `stride`
//! binary converges everything on `anyhow`.

use thiserror::Error;

/// Errors raised while turning user or file input into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A raw field could not be coerced to its typed value.
    #[error("invalid {field} '{value}': {reason}")]
    Coercion {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// An interactive menu selection did not match any option.
    #[error("invalid choice '{value}' for {prompt}")]
    InvalidChoice { prompt: String, value: String },

    /// A search threshold could not be parsed as a number.
    #[error("invalid search threshold '{0}': expected a number")]
    InvalidThreshold(String),
}

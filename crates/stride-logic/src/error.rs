//! Predicate error types for stride-logic.

/// Errors that can occur while tokenizing or parsing a predicate expression.
///
/// Offsets are byte positions into the original expression text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredicateError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    /// A word that is neither an operator, a literal, nor a bound variable.
    #[error("unknown token '{token}' at offset {offset}")]
    UnknownToken { token: String, offset: usize },

    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        offset: usize,
    },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unbalanced parenthesis at offset {offset}")]
    UnbalancedParen { offset: usize },

    /// Nesting or operator chaining exceeds what the evaluator accepts.
    #[error("expression nested deeper than {limit} levels at offset {offset}")]
    TooDeep { offset: usize, limit: usize },
}

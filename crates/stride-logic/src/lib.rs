//! # stride-logic
//!
//! Constrained boolean predicate evaluation over two variables, `p` and `q`.
//!
//! Expressions use the operators `and`, `or`, `not`, the literals `true` and
//! `false`, and parentheses. Keywords and variables match whole words only and
//! ignore ASCII case, so `P and Q` and `p AND q` are the same expression.
//! Precedence is `not` > `and` > `or`; binary operators associate left.
//! Trees deeper than [`MAX_DEPTH`] are rejected at parse time.
//!
//! Nothing in this crate executes text: an expression is tokenized, parsed
//! into an [`Expr`] tree and folded against a pair of [`Bindings`].
//!
//! ```
//! use stride_logic::{Bindings, evaluate};
//!
//! let bindings = Bindings { p: false, q: false };
//! assert_eq!(evaluate("p or not q", bindings), Ok(true));
//! assert!(evaluate("p xor q", bindings).is_err());
//! ```

mod error;
mod lexer;
mod parser;

pub use error::PredicateError;
pub use parser::MAX_DEPTH;

/// One of the two symbolic variables an expression may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    P,
    Q,
}

/// Values bound to `p` and `q` for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bindings {
    pub p: bool,
    pub q: bool,
}

impl Bindings {
    #[must_use]
    pub const fn get(self, var: Variable) -> bool {
        match var {
            Variable::P => self.p,
            Variable::Q => self.q,
        }
    }
}

/// Parsed predicate expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(bool),
    Var(Variable),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Parse `input` without evaluating it.
    pub fn parse(input: &str) -> Result<Self, PredicateError> {
        parser::parse(input)
    }

    /// Evaluate the tree against `bindings`. Both operands of `and`/`or` are
    /// always visited; evaluation has no side effects either way.
    #[must_use]
    pub fn eval(&self, bindings: Bindings) -> bool {
        match self {
            Self::Literal(value) => *value,
            Self::Var(var) => bindings.get(*var),
            Self::Not(inner) => !inner.eval(bindings),
            Self::And(lhs, rhs) => lhs.eval(bindings) & rhs.eval(bindings),
            Self::Or(lhs, rhs) => lhs.eval(bindings) | rhs.eval(bindings),
        }
    }
}

/// Parse and evaluate `input` in one step.
pub fn evaluate(input: &str, bindings: Bindings) -> Result<bool, PredicateError> {
    Expr::parse(input).map(|expr| expr.eval(bindings))
}

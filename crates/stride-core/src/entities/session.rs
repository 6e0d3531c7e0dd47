use serde::{Deserialize, Serialize};
use std::fmt;

use stride_logic::{Bindings, Expr, PredicateError};

/// One recorded attempt at an activity goal.
///
/// A session is immutable once built. Its predicate is re-evaluated on every
/// call to [`Session::evaluate_predicate`]; no result is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    owner: String,
    duration_minutes: i64,
    energy_burned: f64,
    goal_met: bool,
    logged_streak: bool,
    predicate_expr: String,
}

impl Session {
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        duration_minutes: i64,
        energy_burned: f64,
        goal_met: bool,
        logged_streak: bool,
        predicate_expr: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            duration_minutes,
            energy_burned,
            goal_met,
            logged_streak,
            predicate_expr: predicate_expr.into(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    #[must_use]
    pub const fn energy_burned(&self) -> f64 {
        self.energy_burned
    }

    #[must_use]
    pub const fn goal_met(&self) -> bool {
        self.goal_met
    }

    /// Whether the owner logged activity on 3+ distinct days.
    #[must_use]
    pub const fn logged_streak(&self) -> bool {
        self.logged_streak
    }

    #[must_use]
    pub fn predicate_expr(&self) -> &str {
        &self.predicate_expr
    }

    /// `p` is bound to `goal_met`, `q` to `logged_streak`.
    #[must_use]
    pub const fn bindings(&self) -> Bindings {
        Bindings {
            p: self.goal_met,
            q: self.logged_streak,
        }
    }

    /// Evaluate the predicate, surfacing parse failures to the caller.
    pub fn try_predicate(&self) -> Result<bool, PredicateError> {
        stride_logic::evaluate(&self.predicate_expr, self.bindings())
    }

    /// Evaluate the predicate, failing closed.
    ///
    /// A malformed expression evaluates to `false` and is logged with the
    /// owning session and the expression text.
    #[must_use]
    pub fn evaluate_predicate(&self) -> bool {
        match self.try_predicate() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    owner = %self.owner,
                    expr = %self.predicate_expr,
                    %error,
                    "predicate evaluation failed; treating as false"
                );
                false
            }
        }
    }

    /// Evaluate the predicate, failing closed without logging.
    ///
    /// Used where the same session is evaluated many times, such as sort
    /// comparisons; malformed predicates are reported once at ingestion.
    #[must_use]
    pub fn predicate_truth(&self) -> bool {
        self.try_predicate().unwrap_or(false)
    }

    /// Parse the predicate without evaluating it.
    pub fn validate_predicate(&self) -> Result<(), PredicateError> {
        Expr::parse(&self.predicate_expr).map(|_| ())
    }

    /// Flatten into the persisted row shape, evaluating the predicate now.
    #[must_use]
    pub fn to_row(&self) -> SessionRow {
        SessionRow {
            owner: self.owner.clone(),
            duration_minutes: self.duration_minutes,
            energy_burned: self.energy_burned,
            goal_met: self.goal_met,
            logged_streak: self.logged_streak,
            predicate_expr: self.predicate_expr.clone(),
            predicate_value: self.evaluate_predicate(),
        }
    }
}

impl AsRef<Self> for Session {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}min - {} energy - predicate: {}",
            self.owner,
            self.duration_minutes,
            self.energy_burned,
            self.evaluate_predicate()
        )
    }
}

/// Output row for a session: its fields plus the evaluated predicate, in
/// persisted column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    pub owner: String,
    pub duration_minutes: i64,
    pub energy_burned: f64,
    pub goal_met: bool,
    pub logged_streak: bool,
    pub predicate_expr: String,
    pub predicate_value: bool,
}

//! Raw input records and the coercion rules that turn them into sessions.
//!
//! The same rules apply to CSV rows and to answers typed at the interactive
//! prompt. Column names from older exports (`user`, `duration`, `calories`,
//! `met_goal`, `logged_3days`, `logic_expr`) are accepted as aliases.

use serde::Deserialize;

use crate::entities::Session;
use crate::errors::CoreError;

/// A session as it arrives from outside: every field still textual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSession {
    #[serde(alias = "user")]
    pub owner: String,
    #[serde(alias = "duration")]
    pub duration_minutes: String,
    #[serde(alias = "calories")]
    pub energy_burned: String,
    #[serde(alias = "met_goal")]
    pub goal_met: String,
    #[serde(alias = "logged_3days")]
    pub logged_streak: String,
    #[serde(alias = "logic_expr")]
    pub predicate_expr: String,
}

impl TryFrom<RawSession> for Session {
    type Error = CoreError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let duration = parse_int("duration_minutes", &raw.duration_minutes)?;
        let energy = parse_float("energy_burned", &raw.energy_burned)?;
        let goal_met = parse_bool("goal_met", &raw.goal_met)?;
        let logged_streak = parse_bool("logged_streak", &raw.logged_streak)?;

        Ok(Self::new(
            raw.owner.trim(),
            duration,
            energy,
            goal_met,
            logged_streak,
            raw.predicate_expr,
        ))
    }
}

/// Parse an integer field. Whole-valued float literals such as `45.0` are
/// accepted.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64, CoreError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let whole = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64);

    whole.map(|v| v as i64).ok_or_else(|| CoreError::Coercion {
        field,
        value: raw.to_string(),
        reason: "expected a whole number".into(),
    })
}

/// Parse a finite floating-point field.
pub fn parse_float(field: &'static str, raw: &str) -> Result<f64, CoreError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(CoreError::Coercion {
            field,
            value: raw.to_string(),
            reason: "expected a finite number".into(),
        }),
        Err(error) => Err(CoreError::Coercion {
            field,
            value: raw.to_string(),
            reason: error.to_string(),
        }),
    }
}

/// Parse a boolean field (`true/false`, `t/f`, `yes/no`, `y/n`, `1/0`).
pub fn parse_bool(field: &'static str, raw: &str) -> Result<bool, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "0" => Ok(false),
        _ => Err(CoreError::Coercion {
            field,
            value: raw.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}

/// Parse a minimum-energy search threshold.
pub fn parse_threshold(raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| CoreError::InvalidThreshold(raw.trim().to_string()))
}

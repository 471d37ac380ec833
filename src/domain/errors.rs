//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use super::entities::WorkoutKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("unsupported activity code: {0:?}")]
    UnsupportedActivity(String),

    #[error("{kind} expects {expected} arguments, got {actual}")]
    InvalidArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidArgumentValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Package source error: {0}")]
    Source(String),

    #[error("Report output failed: {0}")]
    Report(String),
}

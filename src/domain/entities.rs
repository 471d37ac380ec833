//! Domain entities. Pure data structures for the core business.
//!
//! No IO types here; adapters produce packages and consume messages.

use serde::Deserialize;
use std::fmt;

/// One raw sensor row: short activity code plus a flat argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

/// Supported activity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Name shown in the summary message.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional arguments the variant is constructed from.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Language of the rendered summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

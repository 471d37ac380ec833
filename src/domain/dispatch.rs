//! Maps sensor packages to workout records.

use super::entities::{SensorPackage, WorkoutKind};
use super::errors::DomainError;
use super::workout::{Running, SportsWalking, Swimming, Workout};

/// Short code -> workout kind.
pub const WORKOUT_CODES: [(&str, WorkoutKind); 3] = [
    ("SWM", WorkoutKind::Swimming),
    ("RUN", WorkoutKind::Running),
    ("WLK", WorkoutKind::SportsWalking),
];

/// Resolve a short code. Codes are case-sensitive.
pub fn lookup_kind(code: &str) -> Result<WorkoutKind, DomainError> {
    WORKOUT_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| DomainError::UnsupportedActivity(code.to_string()))
}

/// Build the workout for `code` from its positional arguments.
///
/// Argument order follows the sensor layout:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, DomainError> {
    let kind = lookup_kind(code)?;
    let workout = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Workout::Running(Running::new(action, duration, weight)?)
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            Workout::SportsWalking(SportsWalking::new(action, duration, weight, height)?)
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Workout::Swimming(Swimming::new(
                action,
                duration,
                weight,
                length_pool,
                count_pool,
            )?)
        }
        _ => {
            return Err(DomainError::InvalidArgumentCount {
                kind,
                expected: kind.arity(),
                actual: data.len(),
            });
        }
    };
    Ok(workout)
}

impl TryFrom<&SensorPackage> for Workout {
    type Error = DomainError;

    fn try_from(package: &SensorPackage) -> Result<Self, Self::Error> {
        read_package(&package.code, &package.data)
    }
}

//! Core domain layer. No external I/O dependencies.
//!
//! Formulas, workout records, dispatch and the summary message live here.

pub mod dispatch;
pub mod entities;
pub mod errors;
pub mod message;
pub mod workout;

pub use dispatch::{WORKOUT_CODES, lookup_kind, read_package};
pub use entities::{Locale, SensorPackage, WorkoutKind};
pub use errors::DomainError;
pub use message::InfoMessage;
pub use workout::{ActivityInput, Running, SportsWalking, Swimming, Workout, floor_div};

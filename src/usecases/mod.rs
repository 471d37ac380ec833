//! Application use cases. Orchestrate domain logic via ports.

pub mod workout_service;

pub use workout_service::WorkoutService;

//! Workout records and their formulas.
//!
//! Each variant validates its raw input on construction, so a `Workout` value
//! always has a positive duration and every formula is total.

use super::entities::WorkoutKind;
use super::errors::DomainError;
use super::message::InfoMessage;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Stride length in metres (running, walking).
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in metres (swimming).
pub const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Floor division with the rounding rules of a `fmod`-based float divmod.
///
/// Differs from `(a / b).floor()` near integral quotients: the quotient is
/// rebuilt from the remainder and then snapped to the nearest integer.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div != 0.0 {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(a / b)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::InvalidArgumentValue {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidArgumentValue {
            field,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidArgumentValue {
            field,
            value,
            reason: "must not be negative",
        })
    }
}

/// Largest count that an `f64` still represents exactly.
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

fn whole_count(field: &'static str, value: f64) -> Result<u64, DomainError> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 || value > MAX_EXACT_COUNT {
        return Err(DomainError::InvalidArgumentValue {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    Ok(value as u64)
}

/// Input shared by every variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityInput {
    action: u64,
    duration: f64,
    weight: f64,
}

impl ActivityInput {
    pub fn new(action: f64, duration: f64, weight: f64) -> Result<Self, DomainError> {
        Ok(Self {
            action: whole_count("action", action)?,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    /// Steps or strokes counted by the sensor.
    pub fn action(&self) -> u64 {
        self.action
    }

    /// Duration in hours.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Body weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn distance(&self, step_len: f64) -> f64 {
        self.action as f64 * step_len / M_IN_KM
    }

    fn minutes(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    input: ActivityInput,
}

impl Running {
    pub fn new(action: f64, duration: f64, weight: f64) -> Result<Self, DomainError> {
        Ok(Self {
            input: ActivityInput::new(action, duration, weight)?,
        })
    }

    pub fn distance(&self) -> f64 {
        self.input.distance(LEN_STEP)
    }

    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.input.duration
    }

    pub fn spent_calories(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * self.input.weight
            / M_IN_KM
            * self.input.minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    input: ActivityInput,
    height: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Result<Self, DomainError> {
        Ok(Self {
            input: ActivityInput::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    /// Height in centimetres.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn distance(&self) -> f64 {
        self.input.distance(LEN_STEP)
    }

    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.input.duration
    }

    /// Squared speed is floor-divided by height, so the speed term only
    /// contributes in whole multiples.
    pub fn spent_calories(&self) -> f64 {
        let weight = self.input.weight;
        (WLK_WEIGHT_MULTIPLIER * weight
            + floor_div(self.mean_speed().powi(2), self.height)
                * WLK_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * self.input.minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    input: ActivityInput,
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            input: ActivityInput::new(action, duration, weight)?,
            length_pool: non_negative("length_pool", length_pool)?,
            count_pool: non_negative("count_pool", count_pool)?,
        })
    }

    /// Pool length in metres.
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Laps swum.
    pub fn count_pool(&self) -> f64 {
        self.count_pool
    }

    pub fn distance(&self) -> f64 {
        self.input.distance(LEN_STROKE)
    }

    /// Derived from pool geometry, not from stroke distance.
    pub fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.input.duration
    }

    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * self.input.weight
    }
}

/// A validated workout of one of the supported kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn input(&self) -> &ActivityInput {
        match self {
            Workout::Running(w) => &w.input,
            Workout::SportsWalking(w) => &w.input,
            Workout::Swimming(w) => &w.input,
        }
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::SportsWalking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    /// Calories in kcal.
    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.input().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

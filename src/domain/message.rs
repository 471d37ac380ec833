//! Workout summary and its fixed-format rendering.

use super::entities::Locale;
use serde::{Deserialize, Serialize};

/// Computed summary of one workout. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Km/h.
    pub speed: f64,
    /// Kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line. Field order and 3 fractional digits are fixed for every locale.
    pub fn get_message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Mean speed: {:.3} km/h; Calories spent: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Locale::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

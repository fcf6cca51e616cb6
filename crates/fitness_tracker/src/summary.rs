//! Rendered training summary.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Immutable summary of one evaluated workout record.
///
/// Metrics are stored unrounded; `Display` renders each of the four numeric
/// fields fixed-point with exactly three fractional digits.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct TrainingSummary {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl TrainingSummary {
    pub fn new(
        training_type: impl Into<String>,
        duration_h: f64,
        distance_km: f64,
        speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_h,
            distance_km,
            speed_kmh,
            calories_kcal,
        }
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}

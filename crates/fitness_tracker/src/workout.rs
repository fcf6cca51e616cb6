//! Workout variants and their metric formulas.

use crate::summary::TrainingSummary;
use crate::{TrackerError, TrackerResult};

pub(crate) const M_IN_KM: f64 = 1000.0;
pub(crate) const MIN_IN_H: f64 = 60.0;

/// Capability set shared by every workout variant: distance, mean speed
/// and calories derived from one batch of sensor readings.
///
/// Records are built once from a sensor package, asked for exactly one
/// [`TrainingSummary`] and discarded.
pub trait Workout: std::fmt::Debug + Send + Sync {
    /// Activity label as it appears in the rendered summary.
    fn label(&self) -> &'static str;

    fn duration_h(&self) -> f64;

    /// Distance covered, km.
    fn distance_km(&self) -> f64;

    /// Mean speed over the whole workout, km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Energy spent, kcal.
    fn calories_kcal(&self) -> f64;

    fn summary(&self) -> TrainingSummary {
        TrainingSummary::new(
            self.label(),
            self.duration_h(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories_kcal(),
        )
    }
}

fn check_duration(duration_h: f64) -> TrackerResult<()> {
    // Every derived metric divides by duration.
    if duration_h > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidDuration(duration_h))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Running {
    pub const STEP_LEN_M: f64 = 0.65;
    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> TrackerResult<Self> {
        check_duration(duration_h)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action) * Self::STEP_LEN_M / M_IN_KM
    }

    fn calories_kcal(&self) -> f64 {
        (Self::SPEED_FACTOR * self.mean_speed_kmh() - Self::SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * self.duration_h
            * MIN_IN_H
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    pub const STEP_LEN_M: f64 = 0.65;
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> TrackerResult<Self> {
        check_duration(duration_h)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        })
    }
}

impl Workout for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action) * Self::STEP_LEN_M / M_IN_KM
    }

    fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        // speed²/height is floor-divided, not a true ratio
        let speed_height_term = (speed * speed / self.height_cm).floor();
        (Self::WEIGHT_FACTOR * self.weight_kg
            + speed_height_term * Self::SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub const STEP_LEN_M: f64 = 1.38;
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> TrackerResult<Self> {
        check_duration(duration_h)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps,
        })
    }
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action) * Self::STEP_LEN_M / M_IN_KM
    }

    /// Pool-based speed; the stroke-based distance plays no part here.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_h
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * self.weight_kg
    }
}

//! Workout record evaluation: activity variants, sensor-package dispatch
//! and summary rendering.

use thiserror::Error;

pub mod package;
pub mod summary;
pub mod workout;

pub use package::{SensorPackage, parse_packages, read_package};
pub use summary::TrainingSummary;
pub use workout::{Running, SportsWalking, Swimming, Workout};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown activity code: {0}")]
    UnknownActivity(String),
    #[error("invalid input for {code}: {reason}")]
    InvalidInput { code: String, reason: String },
    #[error("invalid duration: {0} h")]
    InvalidDuration(f64),
    #[error("package parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for record evaluation.
pub type TrackerResult<T> = Result<T, TrackerError>;

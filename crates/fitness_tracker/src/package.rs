//! Sensor package decoding: maps raw activity codes to workout records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::workout::{Running, SportsWalking, Swimming, Workout};
use crate::{TrackerError, TrackerResult};

/// One raw reading from the tracker firmware: a short activity code plus
/// the positional numeric payload for that activity.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

/// Build the workout record a sensor package describes.
///
/// Fixed mapping: `"RUN"` → [`Running`] (3 values), `"WLK"` →
/// [`SportsWalking`] (4), `"SWM"` → [`Swimming`] (5). Payload values are
/// unpacked positionally, in declared field order. A malformed payload or
/// an unrecognized code never yields a record.
pub fn read_package(code: &str, data: &[f64]) -> TrackerResult<Box<dyn Workout>> {
    tracing::debug!(code, values = data.len(), "decoding sensor package");
    match code {
        "RUN" => {
            let [action, duration_h, weight_kg] = unpack(code, data)?;
            let record = Running::new(as_count(code, action)?, duration_h, weight_kg)?;
            Ok(Box::new(record))
        }
        "WLK" => {
            let [action, duration_h, weight_kg, height_cm] = unpack(code, data)?;
            let record =
                SportsWalking::new(as_count(code, action)?, duration_h, weight_kg, height_cm)?;
            Ok(Box::new(record))
        }
        "SWM" => {
            let [action, duration_h, weight_kg, pool_length_m, pool_laps] = unpack(code, data)?;
            let record = Swimming::new(
                as_count(code, action)?,
                duration_h,
                weight_kg,
                pool_length_m,
                as_count(code, pool_laps)?,
            )?;
            Ok(Box::new(record))
        }
        other => Err(TrackerError::UnknownActivity(other.to_string())),
    }
}

/// Parse a JSON array of sensor packages.
pub fn parse_packages(json: &str) -> TrackerResult<Vec<SensorPackage>> {
    Ok(serde_json::from_str(json)?)
}

fn unpack<const N: usize>(code: &str, data: &[f64]) -> TrackerResult<[f64; N]> {
    let values: [f64; N] = data.try_into().map_err(|_| TrackerError::InvalidInput {
        code: code.to_string(),
        reason: format!("expected {N} values, got {}", data.len()),
    })?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(TrackerError::InvalidInput {
            code: code.to_string(),
            reason: format!("non-finite value {bad}"),
        });
    }
    Ok(values)
}

fn as_count(code: &str, value: f64) -> TrackerResult<u32> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrackerError::InvalidInput {
            code: code.to_string(),
            reason: format!("count field must be a non-negative integer, got {value}"),
        });
    }
    Ok(value as u32)
}

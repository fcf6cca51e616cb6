//! Batch driver around the `fitness_tracker` core: loads sensor packages,
//! evaluates them in input order and prints one summary line per record.

use std::io::Write;

use thiserror::Error;

use fitness_tracker::{SensorPackage, TrackerError, Workout, read_package};

pub mod config;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("record error: {0}")]
    Tracker(#[from] TrackerError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for driver operations.
pub type CliResult<T> = Result<T, CliError>;

/// What to do with the rest of a batch when one record fails to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    Abort,
    Skip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub printed: usize,
    pub failed: usize,
}

/// The reference firmware batch used when no packages file is configured.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage {
            code: "SWM".into(),
            data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        SensorPackage {
            code: "RUN".into(),
            data: vec![15000.0, 1.0, 75.0],
        },
        SensorPackage {
            code: "WLK".into(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
}

/// Evaluate every package, writing one newline-terminated summary line per
/// record to `out`, strictly in input order.
///
/// [`OnError::Abort`] stops the batch at the first bad record and returns
/// its error; [`OnError::Skip`] logs the record and keeps going.
pub fn run_batch(
    packages: &[SensorPackage],
    on_error: OnError,
    out: &mut impl Write,
) -> CliResult<RunReport> {
    let mut report = RunReport::default();
    for package in packages {
        match read_package(&package.code, &package.data) {
            Ok(record) => {
                writeln!(out, "{}", record.summary())?;
                report.printed += 1;
            }
            Err(err) => match on_error {
                OnError::Abort => return Err(err.into()),
                OnError::Skip => {
                    tracing::warn!(code = %package.code, error = %err, "skipping sensor package");
                    report.failed += 1;
                }
            },
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .expect("utf8 output")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn sample_batch_prints_three_lines_in_input_order() {
        let mut out = Vec::new();
        let report = run_batch(&sample_packages(), OnError::Abort, &mut out).expect("batch");
        assert_eq!(report, RunReport { printed: 3, failed: 0 });

        let lines = lines(&out);
        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ]
        );
    }

    #[test]
    fn abort_stops_at_first_bad_record() {
        let packages = vec![
            SensorPackage {
                code: "RUN".into(),
                data: vec![15000.0, 1.0, 75.0],
            },
            SensorPackage {
                code: "XYZ".into(),
                data: vec![1.0],
            },
            SensorPackage {
                code: "SWM".into(),
                data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
            },
        ];
        let mut out = Vec::new();
        let err = run_batch(&packages, OnError::Abort, &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Tracker(TrackerError::UnknownActivity(code)) if code == "XYZ"
        ));
        assert_eq!(lines(&out).len(), 1);
    }

    #[test]
    fn skip_keeps_good_records_in_order() {
        let packages = vec![
            SensorPackage {
                code: "XYZ".into(),
                data: vec![],
            },
            SensorPackage {
                code: "RUN".into(),
                data: vec![15000.0, 1.0, 75.0],
            },
            SensorPackage {
                code: "WLK".into(),
                data: vec![9000.0, 1.0],
            },
        ];
        let mut out = Vec::new();
        let report = run_batch(&packages, OnError::Skip, &mut out).expect("batch");
        assert_eq!(report, RunReport { printed: 1, failed: 2 });

        let lines = lines(&out);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Тип тренировки: Running;"));
    }
}

use std::path::PathBuf;

use crate::{CliError, OnError};

#[derive(Clone, Debug)]
pub struct Config {
    pub packages_file: Option<PathBuf>,
    pub on_error: OnError,
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, CliError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages_file = get("FITNESS_TRACKER_PACKAGES_FILE").map(PathBuf::from);
        let on_error = match get("FITNESS_TRACKER_ON_ERROR") {
            None => OnError::Abort,
            Some(value) if value.eq_ignore_ascii_case("abort") => OnError::Abort,
            Some(value) if value.eq_ignore_ascii_case("skip") => OnError::Skip,
            Some(other) => {
                return Err(CliError::Config(format!(
                    "FITNESS_TRACKER_ON_ERROR must be `abort` or `skip`, got `{other}`"
                )));
            }
        };
        Ok(Self {
            packages_file,
            on_error,
        })
    }
}

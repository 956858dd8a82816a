use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors.
///
/// Classification never fails; the only failure modes are the row source
/// and the row sink. Anomalous category data is absorbed by the
/// classifier's fallback rule and surfaced as log events instead.
#[derive(Debug, Error)]
pub enum ResmapError {
    #[error("input error: {path}: {message}")]
    Input { path: PathBuf, message: String },
    #[error("output error: {path}: {message}")]
    Output { path: PathBuf, message: String },
}

impl ResmapError {
    pub fn input(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        ResmapError::Input {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        ResmapError::Output {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResmapError>;

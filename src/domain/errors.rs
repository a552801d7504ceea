//! Domain errors for env materialization.

use std::path::PathBuf;

use thiserror::Error;

use super::models::TargetKind;
use super::ports::StorageError;

/// Errors that abort a materialization run.
///
/// Every variant is terminal: the run stops at the first one and nothing
/// is retried.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Missing required field '{field}' for {target} env")]
    MissingField { target: TargetKind, field: String },

    #[error("Invalid value for field '{field}' in {target} env: {reason}")]
    InvalidField {
        target: TargetKind,
        field: String,
        reason: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl MaterializeError {
    /// Process exit code reported for this error.
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

pub type MaterializeResult<T> = Result<T, MaterializeError>;

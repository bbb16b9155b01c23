//! Tracker-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{0}")]
    Validation(#[from] SharedError),

    #[error("Storage read failed for key '{key}': {message}")]
    StorageReadError { key: String, message: String },

    #[error("Storage write failed for key '{key}': {message}")]
    StorageWriteError { key: String, message: String },

    #[error("Configuration load failed from {source_name}: {message}")]
    ConfigLoadError { source_name: String, message: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn storage_read(key: impl Into<String>, message: impl ToString) -> Self {
        TrackerError::StorageReadError {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn storage_write(key: impl Into<String>, message: impl ToString) -> Self {
        TrackerError::StorageWriteError {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn config_load(source_name: impl Into<String>, message: impl ToString) -> Self {
        TrackerError::ConfigLoadError {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    /// Errors caused by user input, to be shown to the user
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(err) if err.is_validation())
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

//! Error types for the privacy guard pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline stages.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors raised at a pipeline stage boundary.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The input path does not resolve to a readable file.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file has no header row or no data rows.
    #[error("no data found in {}: the file is empty", path.display())]
    EmptyInput { path: PathBuf },

    /// Any other failure while reading or parsing the input.
    #[error("failed to load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// Any I/O or serialization failure while writing the output.
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GuardError {
    /// True for the errors the Loader produces.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            GuardError::NotFound { .. } | GuardError::EmptyInput { .. } | GuardError::Load { .. }
        )
    }
}

/// Shape violations when assembling a [`crate::dataset::Table`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("row {row} has {found} fields, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
}

impl From<::config::ConfigError> for GuardError {
    fn from(err: ::config::ConfigError) -> Self {
        GuardError::Config(err.to_string())
    }
}

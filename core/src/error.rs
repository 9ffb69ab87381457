//! Common error types for tabguard datasets.

use crate::RowLabel;
use thiserror::Error;

/// Errors that can occur while building or reading a dataset.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Column not found.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns share a name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Two rows share a label.
    #[error("Duplicate row label: {0}")]
    DuplicateLabel(RowLabel),

    /// Row label not present in the dataset.
    #[error("Row label not found: {0}")]
    LabelNotFound(RowLabel),

    /// A column (or the label list) does not have one entry per row.
    #[error("Length mismatch in {name}: expected {expected} rows, got {actual}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A cross-column check could not run to completion.
    #[error("Check failed: {0}")]
    CheckFailed(String),
}

impl CoreError {
    pub fn check_failed(message: impl Into<String>) -> Self {
        Self::CheckFailed(message.into())
    }
}

/// Result type for dataset operations.
pub type CoreResult<T> = Result<T, CoreError>;

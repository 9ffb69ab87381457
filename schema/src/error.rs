//! Schema configuration errors.

use thiserror::Error;

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors detected while building a schema. All of them are configuration
/// mistakes and surface before any data is validated.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Duplicate cross check: {0}")]
    DuplicateCrossCheck(String),

    #[error("Column name must not be empty")]
    EmptyColumnName,

    #[error("Cross check name must not be empty")]
    EmptyCrossCheckName,

    /// An empty set would flag every row, so it is rejected as a
    /// configuration mistake.
    #[error("Column '{column}': allowed value set is empty")]
    EmptyAllowedValues { column: String },

    #[error("Column '{column}': invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        column: String,
        pattern: String,
        message: String,
    },

    #[error("Invalid schema config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn empty_allowed_values(column: impl Into<String>) -> Self {
        Self::EmptyAllowedValues {
            column: column.into(),
        }
    }

    pub fn invalid_pattern(
        column: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            column: column.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

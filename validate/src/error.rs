//! Validation error types.

use tabguard_core::{CoreError, RowLabel};
use tabguard_schema::RuleKind;
use thiserror::Error;

/// Result type for validation.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors that abort a validation run.
///
/// Rule violations are not errors; they are reported in the
/// [`crate::ValidationReport`]. These are the conditions under which no
/// trustworthy report can be produced.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Column '{column}' is configured in the schema but missing from the dataset")]
    ColumnMissing { column: String },

    #[error("Rule '{rule}' does not apply to column '{column}': row {label} holds a {found} value")]
    RuleNotApplicable {
        column: String,
        rule: RuleKind,
        label: RowLabel,
        found: String,
    },

    #[error("Cross check '{name}' failed: {message}")]
    CrossCheckFailed { name: String, message: String },

    #[error("Cross check '{check}' returned row label {label}, which is not in the dataset")]
    UnknownRowLabel { check: String, label: RowLabel },
}

impl ValidateError {
    pub fn column_missing(column: impl Into<String>) -> Self {
        Self::ColumnMissing {
            column: column.into(),
        }
    }

    pub fn rule_not_applicable(
        column: impl Into<String>,
        rule: RuleKind,
        label: RowLabel,
        found: impl Into<String>,
    ) -> Self {
        Self::RuleNotApplicable {
            column: column.into(),
            rule,
            label,
            found: found.into(),
        }
    }

    pub fn cross_check_failed(name: impl Into<String>, source: CoreError) -> Self {
        Self::CrossCheckFailed {
            name: name.into(),
            message: source.to_string(),
        }
    }

    pub fn unknown_row_label(check: impl Into<String>, label: RowLabel) -> Self {
        Self::UnknownRowLabel {
            check: check.into(),
            label,
        }
    }
}

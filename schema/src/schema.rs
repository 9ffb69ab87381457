//! The immutable Schema.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::column::ColumnSpec;
use crate::cross::CrossCheck;

/// Expected shape of a dataset. Every field is optional; unset fields are
/// not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructuralExpectations {
    /// Number of rows the data should have.
    pub rows: Option<usize>,
    /// Number of columns the data should have.
    pub columns: Option<usize>,
    /// Column names the data should have, in the expected relative order.
    pub column_names: Option<Vec<String>>,
}

impl StructuralExpectations {
    pub fn is_empty(&self) -> bool {
        self.rows.is_none() && self.columns.is_none() && self.column_names.is_none()
    }
}

/// What validation does when a cross check fails to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossFailurePolicy {
    /// Abort validation with the first failure.
    #[default]
    FailFast,
    /// Record the failure, keep going and mark the report partial.
    Collect,
}

/// A validated collection of column specs, cross checks and structural
/// expectations. Built via [`crate::SchemaBuilder`]; never changes afterwards.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
    column_index: HashMap<String, usize>,
    cross_checks: Vec<CrossCheck>,
    expect: StructuralExpectations,
    cross_failure: CrossFailurePolicy,
}

impl Schema {
    pub(crate) fn new(
        columns: Vec<ColumnSpec>,
        column_index: HashMap<String, usize>,
        cross_checks: Vec<CrossCheck>,
        expect: StructuralExpectations,
        cross_failure: CrossFailurePolicy,
    ) -> Self {
        Self {
            columns,
            column_index,
            cross_checks,
            expect,
            cross_failure,
        }
    }

    /// Column specs in declaration order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Get a column spec by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.column_index.get(name).map(|&i| &self.columns[i])
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name())
    }

    /// Cross checks in registration order.
    pub fn cross_checks(&self) -> &[CrossCheck] {
        &self.cross_checks
    }

    pub fn expectations(&self) -> &StructuralExpectations {
        &self.expect
    }

    pub fn cross_failure_policy(&self) -> CrossFailurePolicy {
        self.cross_failure
    }
}

//! The result of validating one dataset against a schema.

use serde::Serialize;
use tabguard_core::RowLabel;
use tabguard_schema::RuleKind;

use crate::structural::StructuralFinding;
use crate::summary::{ColumnSummary, CrossSummary};
use crate::violation::{RuleOutcome, ViolationReport};

/// Rows flagged by one cross check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossOutcome {
    pub name: String,
    pub rows: Vec<RowLabel>,
}

/// A cross check that failed to run (collected, not raised).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossFailure {
    pub name: String,
    pub message: String,
}

/// Everything one validation run found.
///
/// A report is built fresh by every call to
/// [`crate::SchemaValidator::validate`]; it never aliases an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    columns: Vec<ViolationReport>,
    cross: Vec<CrossOutcome>,
    cross_failures: Vec<CrossFailure>,
    structure: Vec<StructuralFinding>,
}

impl ValidationReport {
    pub(crate) fn new(structure: Vec<StructuralFinding>) -> Self {
        Self {
            structure,
            ..Default::default()
        }
    }

    pub(crate) fn push_column(&mut self, report: ViolationReport) {
        self.columns.push(report);
    }

    pub(crate) fn push_cross(&mut self, name: impl Into<String>, rows: Vec<RowLabel>) {
        self.cross.push(CrossOutcome {
            name: name.into(),
            rows,
        });
    }

    pub(crate) fn push_cross_failure(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.cross_failures.push(CrossFailure {
            name: name.into(),
            message: message.into(),
        });
    }

    /// Per-column reports, in schema order.
    pub fn columns(&self) -> &[ViolationReport] {
        &self.columns
    }

    /// Report for one column.
    pub fn column(&self, name: &str) -> Option<&ViolationReport> {
        self.columns.iter().find(|c| c.column() == name)
    }

    /// Outcome of one rule on one column.
    pub fn rule(&self, column: &str, rule: RuleKind) -> Option<&RuleOutcome> {
        self.column(column).map(|c| c.get(rule))
    }

    /// Cross check results, in registration order.
    pub fn cross_outcomes(&self) -> &[CrossOutcome] {
        &self.cross
    }

    /// Rows flagged by one cross check.
    pub fn cross_violations(&self, name: &str) -> Option<&[RowLabel]> {
        self.cross
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.rows.as_slice())
    }

    /// Cross checks that failed to run. Only populated when the schema
    /// collects failures instead of aborting.
    pub fn cross_failures(&self) -> &[CrossFailure] {
        &self.cross_failures
    }

    pub fn structure(&self) -> &[StructuralFinding] {
        &self.structure
    }

    /// True when some cross check did not run, so the report is incomplete.
    pub fn is_partial(&self) -> bool {
        !self.cross_failures.is_empty()
    }

    /// Column violations plus flagged cross check rows plus failed structural checks.
    pub fn total_violations(&self) -> usize {
        let columns: usize = self.columns.iter().map(|c| c.total_violations()).sum();
        let cross: usize = self.cross.iter().map(|c| c.rows.len()).sum();
        let structure = self.structure.iter().filter(|s| !s.passed).count();
        columns + cross + structure
    }

    /// True when nothing was flagged and the report is complete.
    pub fn is_clean(&self) -> bool {
        !self.is_partial() && self.total_violations() == 0
    }

    /// Violation counts: one table column per schema column, one row per rule.
    pub fn column_summary(&self) -> ColumnSummary {
        ColumnSummary::new(
            self.columns.iter().map(|c| c.column().to_string()).collect(),
            self.columns.iter().map(|c| c.counts()).collect(),
        )
    }

    /// Flagged row counts per cross check. Failed checks come last, without a count.
    pub fn cross_summary(&self) -> CrossSummary {
        let names = self
            .cross
            .iter()
            .map(|c| c.name.clone())
            .chain(self.cross_failures.iter().map(|f| f.name.clone()))
            .collect();
        let counts = self
            .cross
            .iter()
            .map(|c| Some(c.rows.len()))
            .chain(self.cross_failures.iter().map(|_| None))
            .collect();
        CrossSummary::new(names, counts)
    }
}

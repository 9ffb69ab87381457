//! Dataset shape checks: row count, column count and column order.

use serde::Serialize;
use std::fmt;
use tabguard_core::Dataset;
use tabguard_schema::StructuralExpectations;

/// Which structural expectation a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralCheck {
    RowCount,
    ColumnCount,
    ColumnNames,
}

impl fmt::Display for StructuralCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StructuralCheck::RowCount => "row_count",
            StructuralCheck::ColumnCount => "column_count",
            StructuralCheck::ColumnNames => "column_names",
        })
    }
}

/// Result of one structural check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralFinding {
    pub check: StructuralCheck,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

impl StructuralFinding {
    fn new(
        check: StructuralCheck,
        passed: bool,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            check,
            passed,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Run every configured structural check against the dataset.
pub fn check_structure(expect: &StructuralExpectations, data: &Dataset) -> Vec<StructuralFinding> {
    let mut findings = Vec::new();

    if let Some(rows) = expect.rows {
        findings.push(StructuralFinding::new(
            StructuralCheck::RowCount,
            data.n_rows() == rows,
            rows.to_string(),
            data.n_rows().to_string(),
        ));
    }

    if let Some(columns) = expect.columns {
        findings.push(StructuralFinding::new(
            StructuralCheck::ColumnCount,
            data.n_cols() == columns,
            columns.to_string(),
            data.n_cols().to_string(),
        ));
    }

    if let Some(names) = &expect.column_names {
        findings.push(check_column_names(names, data));
    }

    findings
}

/// Every expected name must be present, and the present ones must appear in
/// the expected relative order. Other columns may sit in between.
fn check_column_names(expected: &[String], data: &Dataset) -> StructuralFinding {
    let missing: Vec<&str> = expected
        .iter()
        .filter(|name| !data.has_column(name))
        .map(String::as_str)
        .collect();

    let found: Vec<&str> = data
        .column_names()
        .iter()
        .filter(|name| expected.contains(name))
        .map(String::as_str)
        .collect();
    let wanted: Vec<&str> = expected
        .iter()
        .filter(|name| data.has_column(name))
        .map(String::as_str)
        .collect();

    let in_order = found == wanted;
    let actual = if !missing.is_empty() {
        format!("missing: {}", missing.join(", "))
    } else if !in_order {
        format!("order: {}", found.join(", "))
    } else {
        found.join(", ")
    };

    StructuralFinding::new(
        StructuralCheck::ColumnNames,
        missing.is_empty() && in_order,
        expected.join(", "),
        actual,
    )
}

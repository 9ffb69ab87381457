//! Violation count tables.

use serde::Serialize;
use std::fmt;
use tabguard_schema::RuleKind;

/// Violation counts per column (table columns) and rule (table rows).
///
/// Row-level rules count flagged rows. The type rule counts `1` when the
/// column's inferred type differs from the expected one and `0` when it
/// matches, so a clean column sums to zero. Its one-element verdict is still
/// available through [`crate::TypeVerdict::flag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    columns: Vec<String>,
    counts: Vec<[usize; 6]>,
}

impl ColumnSummary {
    pub(crate) fn new(columns: Vec<String>, counts: Vec<[usize; 6]>) -> Self {
        Self { columns, counts }
    }

    /// Column names, in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Count for one cell; `None` for a column that is not in the table.
    pub fn get(&self, column: &str, rule: RuleKind) -> Option<usize> {
        let i = self.columns.iter().position(|c| c == column)?;
        Some(self.counts[i][rule.index()])
    }

    /// One table row: the counts of `rule` across all columns.
    pub fn row(&self, rule: RuleKind) -> Vec<usize> {
        self.counts.iter().map(|c| c[rule.index()]).collect()
    }

    /// Total of one table column.
    pub fn column_total(&self, column: &str) -> Option<usize> {
        let i = self.columns.iter().position(|c| c == column)?;
        Some(self.counts[i].iter().sum())
    }

    /// Columns with at least one violation.
    pub fn violating_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .zip(&self.counts)
            .filter(|(_, counts)| counts.iter().any(|c| *c > 0))
            .map(|(name, _)| name.as_str())
    }
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec![String::new()];
        header.extend(self.columns.iter().cloned());
        let rows: Vec<Vec<String>> = RuleKind::ALL
            .iter()
            .map(|rule| {
                let mut row = vec![rule.as_str().to_string()];
                row.extend(self.row(*rule).iter().map(usize::to_string));
                row
            })
            .collect();
        write_table(f, &header, &rows)
    }
}

/// Flagged row counts per cross check, as a single-row table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossSummary {
    names: Vec<String>,
    /// `None` for checks that failed to run.
    counts: Vec<Option<usize>>,
}

impl CrossSummary {
    pub(crate) fn new(names: Vec<String>, counts: Vec<Option<usize>>) -> Self {
        Self { names, counts }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Count for one check. `Some(None)` means the check failed to run.
    pub fn get(&self, name: &str) -> Option<Option<usize>> {
        let i = self.names.iter().position(|n| n == name)?;
        Some(self.counts[i])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

impl fmt::Display for CrossSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec![String::new()];
        header.extend(self.names.iter().cloned());
        let mut row = vec!["0".to_string()];
        row.extend(self.counts.iter().map(|c| match c {
            Some(n) => n.to_string(),
            None => "failed".to_string(),
        }));
        write_table(f, &header, &[row])
    }
}

/// Right-aligned plain-text table.
fn write_table(f: &mut fmt::Formatter<'_>, header: &[String], rows: &[Vec<String>]) -> fmt::Result {
    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .chain(std::iter::once(&header[i]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for line in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        writeln!(f, "{}", cells.join("  ").trim_end())?;
    }
    Ok(())
}

//! Rule outcomes and per-column violation reports.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tabguard_core::RowLabel;
use tabguard_schema::{ColumnType, RuleKind};

/// Result of the column-level type rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeVerdict {
    /// The configured type.
    pub expected: ColumnType,
    /// The type inferred from the column's values.
    pub inferred: ColumnType,
}

impl TypeVerdict {
    /// Check if the inferred type equals the expected one.
    pub fn matches(&self) -> bool {
        self.expected == self.inferred
    }

    /// `1` when the column has the expected type, `0` otherwise.
    pub fn flag(&self) -> u8 {
        u8::from(self.matches())
    }
}

/// Outcome of one rule on one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The rule is not configured for this column.
    NotEvaluated,
    /// The rule ran and found nothing.
    Passed,
    /// The rule ran and flagged these rows. Never empty.
    Failed(Vec<RowLabel>),
    /// Column-level type check.
    ColumnType(TypeVerdict),
}

impl RuleOutcome {
    /// Build the outcome of a row-level rule from its flagged rows.
    pub fn from_rows(rows: Vec<RowLabel>) -> Self {
        if rows.is_empty() {
            RuleOutcome::Passed
        } else {
            RuleOutcome::Failed(rows)
        }
    }

    pub fn is_evaluated(&self) -> bool {
        !matches!(self, RuleOutcome::NotEvaluated)
    }

    /// Check if the rule found a problem.
    pub fn is_violation(&self) -> bool {
        match self {
            RuleOutcome::NotEvaluated | RuleOutcome::Passed => false,
            RuleOutcome::Failed(_) => true,
            RuleOutcome::ColumnType(verdict) => !verdict.matches(),
        }
    }

    /// Number of violations: flagged rows, or 1 for a type mismatch.
    pub fn violation_count(&self) -> usize {
        match self {
            RuleOutcome::NotEvaluated | RuleOutcome::Passed => 0,
            RuleOutcome::Failed(rows) => rows.len(),
            RuleOutcome::ColumnType(verdict) => usize::from(!verdict.matches()),
        }
    }

    /// Flagged rows. Empty for anything but `Failed`.
    pub fn rows(&self) -> &[RowLabel] {
        match self {
            RuleOutcome::Failed(rows) => rows,
            _ => &[],
        }
    }

    pub fn type_verdict(&self) -> Option<&TypeVerdict> {
        match self {
            RuleOutcome::ColumnType(verdict) => Some(verdict),
            _ => None,
        }
    }
}

/// Outcomes of all six rules for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationReport {
    column: String,
    outcomes: [RuleOutcome; 6],
}

impl ViolationReport {
    /// Create a report with every rule not evaluated.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            outcomes: std::array::from_fn(|_| RuleOutcome::NotEvaluated),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn get(&self, rule: RuleKind) -> &RuleOutcome {
        &self.outcomes[rule.index()]
    }

    pub(crate) fn set(&mut self, rule: RuleKind, outcome: RuleOutcome) {
        self.outcomes[rule.index()] = outcome;
    }

    /// Rows flagged by a row-level rule.
    pub fn violations(&self, rule: RuleKind) -> &[RowLabel] {
        self.get(rule).rows()
    }

    /// Outcomes in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &RuleOutcome)> {
        RuleKind::ALL.into_iter().zip(self.outcomes.iter())
    }

    /// Violation count per rule, in rule order.
    pub fn counts(&self) -> [usize; 6] {
        std::array::from_fn(|i| self.outcomes[i].violation_count())
    }

    pub fn total_violations(&self) -> usize {
        self.counts().iter().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| !o.is_violation())
    }
}

impl Serialize for ViolationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RuleKind::ALL.len() + 1))?;
        map.serialize_entry("column", &self.column)?;
        for (rule, outcome) in self.iter() {
            map.serialize_entry(rule.as_str(), outcome)?;
        }
        map.end()
    }
}

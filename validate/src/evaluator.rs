//! Per-column rule evaluation.

use std::collections::HashMap;
use tabguard_core::{ColumnSlice, RowLabel, Value, ValueKey};
use tabguard_schema::{ColumnSpec, ColumnType, RuleKind};

use crate::error::{ValidateError, ValidateResult};
use crate::violation::{RuleOutcome, TypeVerdict, ViolationReport};

/// Evaluates one column's rules against a column of data.
///
/// Evaluation is pure: every call builds a fresh [`ViolationReport`] and the
/// spec itself is never touched.
pub struct ColumnEvaluator<'s> {
    spec: &'s ColumnSpec,
}

impl<'s> ColumnEvaluator<'s> {
    /// Create a new evaluator.
    pub fn new(spec: &'s ColumnSpec) -> Self {
        Self { spec }
    }

    /// Run every enabled rule, in rule order.
    pub fn evaluate(&self, column: ColumnSlice<'_>) -> ValidateResult<ViolationReport> {
        let mut report = ViolationReport::new(self.spec.name());

        for rule in self.spec.rules().iter() {
            let outcome = match rule {
                RuleKind::Type => self.eval_type(column),
                RuleKind::Missing => self.eval_missing(column),
                RuleKind::Duplicates => self.eval_duplicates(column),
                RuleKind::OneOf => self.eval_one_of(column),
                RuleKind::StartsWith => self.eval_string_rule(column, rule, |text| {
                    self.spec.prefix().map(|p| text.starts_with(p)).unwrap_or(true)
                })?,
                RuleKind::Pattern => {
                    self.eval_string_rule(column, rule, |text| self.spec.full_match(text))?
                }
            };
            report.set(rule, outcome);
        }

        tracing::debug!(
            column = self.spec.name(),
            rows = column.len(),
            rules = self.spec.rules().len(),
            violations = report.total_violations(),
            "evaluated column"
        );

        Ok(report)
    }

    // ========== Individual rules ==========

    /// Compare the inferred column type with the expected one.
    fn eval_type(&self, column: ColumnSlice<'_>) -> RuleOutcome {
        match self.spec.expected_type() {
            Some(expected) => RuleOutcome::ColumnType(TypeVerdict {
                expected,
                inferred: infer_type(column.values()),
            }),
            None => RuleOutcome::NotEvaluated,
        }
    }

    /// Rows holding a missing value.
    fn eval_missing(&self, column: ColumnSlice<'_>) -> RuleOutcome {
        flag_rows(column, |value| value.is_missing())
    }

    /// Every row whose value occurs more than once. Missing values are equal
    /// to each other here.
    fn eval_duplicates(&self, column: ColumnSlice<'_>) -> RuleOutcome {
        let keys: Vec<ValueKey> = column.values().iter().map(Value::key).collect();
        let mut counts: HashMap<&ValueKey, usize> = HashMap::with_capacity(keys.len());
        for key in &keys {
            *counts.entry(key).or_default() += 1;
        }

        let rows = column
            .labels()
            .iter()
            .zip(&keys)
            .filter(|(_, key)| counts[key] > 1)
            .map(|(label, _)| label.clone())
            .collect();
        RuleOutcome::from_rows(rows)
    }

    /// Rows whose value is not an allowed value.
    fn eval_one_of(&self, column: ColumnSlice<'_>) -> RuleOutcome {
        flag_rows(column, |value| !self.spec.allows(value))
    }

    /// Rows whose string value fails `accept`. Missing values are skipped;
    /// any other non-string value makes the rule inapplicable.
    fn eval_string_rule<F>(
        &self,
        column: ColumnSlice<'_>,
        rule: RuleKind,
        accept: F,
    ) -> ValidateResult<RuleOutcome>
    where
        F: Fn(&str) -> bool,
    {
        let mut rows = Vec::new();
        for (label, value) in column.iter() {
            if value.is_missing() {
                continue;
            }
            let text = value.as_str().ok_or_else(|| {
                ValidateError::rule_not_applicable(
                    self.spec.name(),
                    rule,
                    label.clone(),
                    value.type_name(),
                )
            })?;
            if !accept(text) {
                rows.push(label.clone());
            }
        }
        Ok(RuleOutcome::from_rows(rows))
    }
}

fn flag_rows<F>(column: ColumnSlice<'_>, flag: F) -> RuleOutcome
where
    F: Fn(&Value) -> bool,
{
    let rows: Vec<RowLabel> = column
        .iter()
        .filter(|(_, value)| flag(*value))
        .map(|(label, _)| label.clone())
        .collect();
    RuleOutcome::from_rows(rows)
}

/// Infer the type category of a column from its present values.
///
/// Missing values are ignored. A column with no present values, or with
/// values of more than one kind (ints mixed with floats included), is
/// [`ColumnType::Mixed`].
pub fn infer_type(values: &[Value]) -> ColumnType {
    let mut inferred: Option<ColumnType> = None;
    for value in values.iter().filter(|v| !v.is_missing()) {
        let kind = match value {
            Value::String(_) => ColumnType::String,
            Value::Int(_) => ColumnType::Integer,
            Value::Float(_) => ColumnType::Float,
            Value::Bool(_) => ColumnType::Boolean,
            Value::Null => continue,
        };
        match inferred {
            None => inferred = Some(kind),
            Some(seen) if seen == kind => {}
            Some(_) => return ColumnType::Mixed,
        }
    }
    inferred.unwrap_or(ColumnType::Mixed)
}

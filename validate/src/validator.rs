//! Schema validation.

use std::collections::HashSet;
use tabguard_core::{Dataset, RowLabel};
use tabguard_schema::{CrossCheck, CrossFailurePolicy, Schema};

use crate::error::{ValidateError, ValidateResult};
use crate::evaluator::ColumnEvaluator;
use crate::report::ValidationReport;
use crate::structural::check_structure;

/// Validates datasets against one schema.
///
/// The validator holds no results: each [`validate`](Self::validate) call
/// returns a fresh [`ValidationReport`], so one schema can be reused across
/// datasets and threads.
pub struct SchemaValidator<'s> {
    schema: &'s Schema,
}

impl<'s> SchemaValidator<'s> {
    /// Create a new validator.
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Validate a dataset.
    ///
    /// Runs structural checks, then every column in schema order, then every
    /// cross check. A missing column, an inapplicable string rule or a failing
    /// cross check (under [`CrossFailurePolicy::FailFast`]) aborts the run and
    /// no report is returned.
    pub fn validate(&self, data: &Dataset) -> ValidateResult<ValidationReport> {
        let structure = check_structure(self.schema.expectations(), data);
        for finding in structure.iter().filter(|f| !f.passed) {
            tracing::warn!(
                check = %finding.check,
                expected = %finding.expected,
                actual = %finding.actual,
                "structural check failed"
            );
        }
        let mut report = ValidationReport::new(structure);

        for spec in self.schema.columns() {
            let column = data
                .column(spec.name())
                .ok_or_else(|| ValidateError::column_missing(spec.name()))?;
            report.push_column(ColumnEvaluator::new(spec).evaluate(column)?);
        }

        let known: HashSet<&RowLabel> = data.labels().iter().collect();
        for check in self.schema.cross_checks() {
            match self.run_cross_check(check, data, &known) {
                Ok(rows) => report.push_cross(check.name(), rows),
                Err(e) if self.schema.cross_failure_policy() == CrossFailurePolicy::Collect => {
                    tracing::warn!(check = check.name(), error = %e, "cross check failed");
                    report.push_cross_failure(check.name(), e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            rows = data.n_rows(),
            columns = report.columns().len(),
            cross_checks = report.cross_outcomes().len(),
            violations = report.total_violations(),
            partial = report.is_partial(),
            "validation complete"
        );

        Ok(report)
    }

    /// Run one cross check and verify that every label it returns exists.
    fn run_cross_check(
        &self,
        check: &CrossCheck,
        data: &Dataset,
        known: &HashSet<&RowLabel>,
    ) -> ValidateResult<Vec<RowLabel>> {
        let rows = check
            .run(data)
            .map_err(|e| ValidateError::cross_check_failed(check.name(), e))?;

        if let Some(label) = rows.iter().find(|label| !known.contains(label)) {
            return Err(ValidateError::unknown_row_label(check.name(), label.clone()));
        }

        tracing::debug!(check = check.name(), flagged = rows.len(), "ran cross check");
        Ok(rows)
    }
}

/// Validate `data` against `schema`.
pub fn validate(schema: &Schema, data: &Dataset) -> ValidateResult<ValidationReport> {
    SchemaValidator::new(schema).validate(data)
}

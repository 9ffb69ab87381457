//! SchemaBuilder for constructing an immutable Schema.

use std::collections::HashMap;
use tabguard_core::Value;

use crate::column::{ColumnDef, ColumnSpec};
use crate::cross::CrossCheck;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::{CrossFailurePolicy, Schema, StructuralExpectations};
use crate::types::ColumnType;

/// Builder for constructing an immutable [`Schema`].
///
/// Column configuration is compiled as soon as it is added, so malformed
/// patterns and duplicate names fail here rather than during validation.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Compiled columns in declaration order.
    columns: Vec<ColumnSpec>,
    /// Column name to position mapping.
    column_index: HashMap<String, usize>,
    /// Cross checks in registration order.
    cross_checks: Vec<CrossCheck>,
    /// Structural expectations.
    expect: StructuralExpectations,
    /// Cross check failure handling.
    cross_failure: CrossFailurePolicy,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a column definition.
    pub fn add_column(&mut self, name: impl Into<String>) -> ColumnBuilder<'_> {
        ColumnBuilder {
            builder: self,
            def: ColumnDef::new(name),
        }
    }

    /// Add a complete column definition.
    pub fn add_column_def(&mut self, def: ColumnDef) -> SchemaResult<&mut Self> {
        if self.column_index.contains_key(&def.name) {
            return Err(SchemaError::DuplicateColumn(def.name));
        }
        let spec = ColumnSpec::compile(def)?;
        self.column_index
            .insert(spec.name().to_string(), self.columns.len());
        self.columns.push(spec);
        Ok(self)
    }

    /// Register a cross check. Names must be unique.
    pub fn add_cross_check(&mut self, check: CrossCheck) -> SchemaResult<&mut Self> {
        if check.name().trim().is_empty() {
            return Err(SchemaError::EmptyCrossCheckName);
        }
        if self.cross_checks.iter().any(|c| c.name() == check.name()) {
            return Err(SchemaError::DuplicateCrossCheck(check.name().to_string()));
        }
        self.cross_checks.push(check);
        Ok(self)
    }

    /// Expect an exact number of rows.
    pub fn expect_rows(&mut self, rows: usize) -> &mut Self {
        self.expect.rows = Some(rows);
        self
    }

    /// Expect an exact number of columns.
    pub fn expect_columns(&mut self, columns: usize) -> &mut Self {
        self.expect.columns = Some(columns);
        self
    }

    /// Expect these column names, in this relative order.
    pub fn expect_column_names<S: Into<String>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.expect.column_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Replace all structural expectations.
    pub fn expectations(&mut self, expect: StructuralExpectations) -> &mut Self {
        self.expect = expect;
        self
    }

    /// Choose how cross check failures are handled.
    pub fn on_cross_failure(&mut self, policy: CrossFailurePolicy) -> &mut Self {
        self.cross_failure = policy;
        self
    }

    /// Build the immutable Schema.
    pub fn build(self) -> SchemaResult<Schema> {
        Ok(Schema::new(
            self.columns,
            self.column_index,
            self.cross_checks,
            self.expect,
            self.cross_failure,
        ))
    }
}

/// Builder for a single column definition.
pub struct ColumnBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    def: ColumnDef,
}

impl<'a> ColumnBuilder<'a> {
    /// Expect a type category.
    pub fn col_type(mut self, col_type: ColumnType) -> Self {
        self.def = self.def.with_type(col_type);
        self
    }

    /// Disallow missing values.
    pub fn required(mut self) -> Self {
        self.def = self.def.required();
        self
    }

    /// Disallow duplicate values.
    pub fn unique(mut self) -> Self {
        self.def = self.def.unique();
        self
    }

    /// Restrict values to a fixed set.
    pub fn one_of<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.def = self.def.with_allowed_values(values);
        self
    }

    /// Require a string prefix.
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.def = self.def.with_prefix(prefix);
        self
    }

    /// Require a full regex match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.def = self.def.with_pattern(pattern);
        self
    }

    /// Finish building this column.
    pub fn done(self) -> SchemaResult<()> {
        self.builder.add_column_def(self.def)?;
        Ok(())
    }
}

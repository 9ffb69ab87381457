//! In-memory tabular datasets.
//!
//! A [`Dataset`] is an ordered set of named columns sharing one list of row
//! labels. Columns are handed to rule evaluation as borrowed
//! [`ColumnSlice`]s, so the labels travel with the values and no data is
//! copied.

use crate::{CoreError, CoreResult, RowLabel, Value};
use std::collections::{HashMap, HashSet};

/// A table of rows identified by [`RowLabel`] and columns identified by name.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Row labels, one per row.
    labels: Vec<RowLabel>,
    /// Column names in insertion order.
    names: Vec<String>,
    /// Column values, parallel to `names`.
    columns: Vec<Vec<Value>>,
    /// Column name to position mapping.
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Start building a dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Build a dataset from rows of values under the given column names.
    /// Rows receive positional labels.
    pub fn from_rows<N, R>(names: &[N], rows: R) -> CoreResult<Self>
    where
        N: AsRef<str>,
        R: IntoIterator<Item = Vec<Value>>,
    {
        let mut columns: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(CoreError::LengthMismatch {
                    name: format!("row {}", i),
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        let mut builder = Dataset::builder();
        for (name, values) in names.iter().zip(columns) {
            builder = builder.column(name.as_ref(), values);
        }
        builder.build()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Row labels in row order.
    pub fn labels(&self) -> &[RowLabel] {
        &self.labels
    }

    /// Column names in column order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Check if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a borrowed view of a column by name.
    pub fn column(&self, name: &str) -> Option<ColumnSlice<'_>> {
        self.index.get(name).map(|&i| ColumnSlice {
            name: &self.names[i],
            labels: &self.labels,
            values: &self.columns[i],
        })
    }

    /// Get a column by name, failing with [`CoreError::ColumnNotFound`].
    pub fn try_column(&self, name: &str) -> CoreResult<ColumnSlice<'_>> {
        self.column(name)
            .ok_or_else(|| CoreError::ColumnNotFound(name.to_string()))
    }

    /// Get a single cell by row label and column name.
    pub fn get(&self, label: &RowLabel, column: &str) -> Option<&Value> {
        let col = self.index.get(column)?;
        let row = self.labels.iter().position(|l| l == label)?;
        self.columns[*col].get(row)
    }

    /// Replace the row labels, keeping the data.
    pub fn with_labels(mut self, labels: Vec<RowLabel>) -> CoreResult<Self> {
        check_labels(&labels, self.n_rows())?;
        self.labels = labels;
        Ok(self)
    }

    /// Overwrite one cell.
    pub fn set(&mut self, label: &RowLabel, column: &str, value: Value) -> CoreResult<()> {
        let col = *self
            .index
            .get(column)
            .ok_or_else(|| CoreError::ColumnNotFound(column.to_string()))?;
        let row = self
            .labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| CoreError::LabelNotFound(label.clone()))?;
        self.columns[col][row] = value;
        Ok(())
    }
}

/// Borrowed view of one dataset column together with its row labels.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSlice<'a> {
    name: &'a str,
    labels: &'a [RowLabel],
    values: &'a [Value],
}

impl<'a> ColumnSlice<'a> {
    /// Column name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Row labels.
    pub fn labels(&self) -> &'a [RowLabel] {
        self.labels
    }

    /// Values in row order.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(label, value)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a RowLabel, &'a Value)> + 'a {
        self.labels.iter().zip(self.values.iter())
    }
}

/// Builder for a [`Dataset`].
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    labels: Option<Vec<RowLabel>>,
    columns: Vec<(String, Vec<Value>)>,
}

impl DatasetBuilder {
    /// Set explicit row labels. Defaults to positional labels.
    pub fn labels<L: Into<RowLabel>>(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Add a column.
    pub fn column(mut self, name: impl Into<String>, values: Vec<Value>) -> Self {
        self.columns.push((name.into(), values));
        self
    }

    /// Finish building the dataset.
    pub fn build(self) -> CoreResult<Dataset> {
        let n_rows = match (&self.labels, self.columns.first()) {
            (Some(labels), _) => labels.len(),
            (None, Some((_, values))) => values.len(),
            (None, None) => 0,
        };

        let labels = match self.labels {
            Some(labels) => {
                check_labels(&labels, n_rows)?;
                labels
            }
            None => RowLabel::range(n_rows),
        };

        let mut names = Vec::with_capacity(self.columns.len());
        let mut columns = Vec::with_capacity(self.columns.len());
        let mut index = HashMap::new();

        for (name, values) in self.columns {
            if values.len() != n_rows {
                return Err(CoreError::LengthMismatch {
                    name,
                    expected: n_rows,
                    actual: values.len(),
                });
            }
            if index.contains_key(&name) {
                return Err(CoreError::DuplicateColumn(name));
            }
            index.insert(name.clone(), names.len());
            names.push(name);
            columns.push(values);
        }

        Ok(Dataset {
            labels,
            names,
            columns,
            index,
        })
    }
}

fn check_labels(labels: &[RowLabel], n_rows: usize) -> CoreResult<()> {
    if labels.len() != n_rows {
        return Err(CoreError::LengthMismatch {
            name: "row labels".to_string(),
            expected: n_rows,
            actual: labels.len(),
        });
    }
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label) {
            return Err(CoreError::DuplicateLabel(label.clone()));
        }
    }
    Ok(())
}

//! Cross-column checks.
//!
//! A cross check sees the whole dataset and returns the labels of rows that
//! break some relationship between columns. The function is supplied by the
//! caller; this module only fixes its shape and offers builders for the
//! common "this column is made of those columns" relationships.

use std::fmt;
use std::sync::Arc;
use tabguard_core::{ColumnSlice, CoreResult, Dataset, RowLabel, Value};

/// Signature of a cross-column check function.
pub type CrossFn = dyn Fn(&Dataset) -> CoreResult<Vec<RowLabel>> + Send + Sync;

/// A named cross-column check.
#[derive(Clone)]
pub struct CrossCheck {
    name: String,
    func: Arc<CrossFn>,
}

impl fmt::Debug for CrossCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossCheck")
            .field("name", &self.name)
            .field("func", &"<fn>")
            .finish()
    }
}

impl CrossCheck {
    /// Wrap a check function under a stable name.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Dataset) -> CoreResult<Vec<RowLabel>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The `target` column must equal the concatenation of `parts`.
    ///
    /// Rows where the target or any contributing column is missing are
    /// flagged.
    pub fn composite(
        name: impl Into<String>,
        target: impl Into<String>,
        parts: Vec<KeyPart>,
    ) -> Self {
        let target = target.into();
        Self::new(name, move |data: &Dataset| {
            let target_col = data.try_column(&target)?;
            let sources = parts
                .iter()
                .map(|part| match part {
                    KeyPart::Column(column) => data.try_column(column).map(Some),
                    KeyPart::Literal(_) => Ok(None),
                })
                .collect::<CoreResult<Vec<Option<ColumnSlice<'_>>>>>()?;

            let mut flagged = Vec::new();
            for (row, (label, value)) in target_col.iter().enumerate() {
                let expected = compose(&parts, &sources, row);
                if !matches_rendered(value, expected.as_deref()) {
                    flagged.push(label.clone());
                }
            }
            Ok(flagged)
        })
    }

    /// The `target` column must equal `transform` applied to `source`.
    ///
    /// `transform` receives the rendered source value and may return `None`
    /// when no expected value can be derived, which flags the row.
    pub fn derived<F>(
        name: impl Into<String>,
        target: impl Into<String>,
        source: impl Into<String>,
        transform: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        let target = target.into();
        let source = source.into();
        Self::new(name, move |data: &Dataset| {
            let target_col = data.try_column(&target)?;
            let source_col = data.try_column(&source)?;

            let mut flagged = Vec::new();
            for ((label, value), input) in target_col.iter().zip(source_col.values()) {
                let expected = if input.is_missing() {
                    None
                } else {
                    transform(&input.render())
                };
                if !matches_rendered(value, expected.as_deref()) {
                    flagged.push(label.clone());
                }
            }
            Ok(flagged)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the check against a dataset.
    pub fn run(&self, data: &Dataset) -> CoreResult<Vec<RowLabel>> {
        (self.func)(data)
    }
}

/// One piece of a composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPart {
    /// Rendered value of a column in the same row.
    Column(String),
    /// Fixed text.
    Literal(String),
}

impl KeyPart {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }
}

fn compose(parts: &[KeyPart], sources: &[Option<ColumnSlice<'_>>], row: usize) -> Option<String> {
    let mut key = String::new();
    for (part, source) in parts.iter().zip(sources) {
        match (part, source) {
            (KeyPart::Literal(text), _) => key.push_str(text),
            (KeyPart::Column(_), Some(column)) => {
                let value = &column.values()[row];
                if value.is_missing() {
                    return None;
                }
                key.push_str(&value.render());
            }
            (KeyPart::Column(_), None) => return None,
        }
    }
    Some(key)
}

fn matches_rendered(value: &Value, expected: Option<&str>) -> bool {
    match expected {
        Some(expected) => !value.is_missing() && value.render() == expected,
        None => false,
    }
}

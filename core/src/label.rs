//! Row labels.
//!
//! A row label is the stable identity of a row. Labels are assigned when a
//! dataset is built and survive slicing, so violations always point back to
//! the row the caller knows, not to a position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a dataset row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowLabel {
    /// Integer label (the default, positional labels are `0..n`).
    Int(i64),
    /// Text label (e.g. a spreadsheet row key).
    Str(String),
}

impl RowLabel {
    /// Positional labels `0..n`.
    pub fn range(n: usize) -> Vec<RowLabel> {
        (0..n as i64).map(RowLabel::Int).collect()
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLabel::Int(i) => write!(f, "{}", i),
            RowLabel::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RowLabel {
    fn from(i: i64) -> Self {
        RowLabel::Int(i)
    }
}

impl From<i32> for RowLabel {
    fn from(i: i32) -> Self {
        RowLabel::Int(i as i64)
    }
}

impl From<usize> for RowLabel {
    fn from(i: usize) -> Self {
        RowLabel::Int(i as i64)
    }
}

impl From<&str> for RowLabel {
    fn from(s: &str) -> Self {
        RowLabel::Str(s.to_string())
    }
}

impl From<String> for RowLabel {
    fn from(s: String) -> Self {
        RowLabel::Str(s)
    }
}

/// Helper macro to build a list of row labels.
#[macro_export]
macro_rules! labels {
    () => {
        Vec::<$crate::RowLabel>::new()
    };
    ($($label:expr),+ $(,)?) => {
        vec![$($crate::RowLabel::from($label)),+]
    };
}

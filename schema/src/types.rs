//! Schema definition types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected type category of a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every present value is a string.
    String,
    /// Every present value is an integer.
    Integer,
    /// Every present value is a float.
    Float,
    /// Every present value is a boolean.
    Boolean,
    /// Heterogeneous values, or no present values at all.
    Mixed,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the six per-column rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Type,
    Missing,
    Duplicates,
    OneOf,
    StartsWith,
    Pattern,
}

impl RuleKind {
    /// All rule kinds in evaluation order.
    pub const ALL: [RuleKind; 6] = [
        RuleKind::Type,
        RuleKind::Missing,
        RuleKind::Duplicates,
        RuleKind::OneOf,
        RuleKind::StartsWith,
        RuleKind::Pattern,
    ];

    /// Position of this rule in [`RuleKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Type => "type",
            RuleKind::Missing => "missing",
            RuleKind::Duplicates => "duplicates",
            RuleKind::OneOf => "one_of",
            RuleKind::StartsWith => "starts_with",
            RuleKind::Pattern => "pattern",
        }
    }

}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed set of enabled rules for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    enabled: [bool; 6],
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a rule.
    pub fn with(mut self, kind: RuleKind) -> Self {
        self.enabled[kind.index()] = true;
        self
    }

    /// Check if a rule is enabled.
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.enabled[kind.index()]
    }

    /// Enabled rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = RuleKind> + '_ {
        RuleKind::ALL.into_iter().filter(|k| self.contains(*k))
    }

    /// Number of enabled rules.
    pub fn len(&self) -> usize {
        self.enabled.iter().filter(|e| **e).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Column definitions and their compiled form.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tabguard_core::{Value, ValueKey};

use crate::error::{SchemaError, SchemaResult};
use crate::types::{ColumnType, RuleKind, RuleSet};

fn default_true() -> bool {
    true
}

/// Declarative requirements of one column.
///
/// Only columns with requirements need a definition; anything left at its
/// default disables the matching rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    /// Column name (key into the dataset).
    pub name: String,
    /// Expected type category.
    #[serde(default, rename = "type")]
    pub col_type: Option<ColumnType>,
    /// Whether this column can contain missing values.
    #[serde(default = "default_true")]
    pub allow_missing: bool,
    /// Whether this column can contain duplicate values.
    #[serde(default = "default_true")]
    pub allow_duplicates: bool,
    /// The only values the column may hold.
    #[serde(default)]
    pub one_of: Option<Vec<Value>>,
    /// Prefix every value must start with.
    #[serde(default)]
    pub starts_with: Option<String>,
    /// Regex every value must fully match.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            col_type: None,
            allow_missing: true,
            allow_duplicates: true,
            one_of: None,
            starts_with: None,
            pattern: None,
        }
    }

    pub fn with_type(mut self, col_type: ColumnType) -> Self {
        self.col_type = Some(col_type);
        self
    }

    /// Disallow missing values.
    pub fn required(mut self) -> Self {
        self.allow_missing = false;
        self
    }

    /// Disallow duplicate values.
    pub fn unique(mut self) -> Self {
        self.allow_duplicates = false;
        self
    }

    pub fn with_allowed_values<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Rules this definition enables.
    pub fn rules(&self) -> RuleSet {
        let mut rules = RuleSet::new();
        if self.col_type.is_some() {
            rules = rules.with(RuleKind::Type);
        }
        if !self.allow_missing {
            rules = rules.with(RuleKind::Missing);
        }
        if !self.allow_duplicates {
            rules = rules.with(RuleKind::Duplicates);
        }
        if self.one_of.is_some() {
            rules = rules.with(RuleKind::OneOf);
        }
        if self.starts_with.is_some() {
            rules = rules.with(RuleKind::StartsWith);
        }
        if self.pattern.is_some() {
            rules = rules.with(RuleKind::Pattern);
        }
        rules
    }
}

/// A column definition compiled for evaluation.
///
/// The rule set, allowed-value keys and anchored regex are fixed here and
/// never change afterwards.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    def: ColumnDef,
    rules: RuleSet,
    allowed: HashSet<ValueKey>,
    regex: Option<Regex>,
}

impl ColumnSpec {
    /// Compile a definition, rejecting malformed configuration.
    pub fn compile(def: ColumnDef) -> SchemaResult<Self> {
        if def.name.trim().is_empty() {
            return Err(SchemaError::EmptyColumnName);
        }

        let allowed = match &def.one_of {
            Some(values) if values.is_empty() => {
                return Err(SchemaError::empty_allowed_values(&def.name))
            }
            Some(values) => values.iter().map(Value::key).collect(),
            None => HashSet::new(),
        };

        let regex = match &def.pattern {
            Some(pattern) => Some(compile_full_match(&def.name, pattern)?),
            None => None,
        };

        Ok(Self {
            rules: def.rules(),
            def,
            allowed,
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Rules enabled for this column.
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn expected_type(&self) -> Option<ColumnType> {
        self.def.col_type
    }

    pub fn prefix(&self) -> Option<&str> {
        self.def.starts_with.as_deref()
    }

    /// Check membership in the allowed-value set. Missing values are never members.
    pub fn allows(&self, value: &Value) -> bool {
        !value.is_missing() && self.allowed.contains(&value.key())
    }

    /// Check a string against the anchored pattern. Always true without a pattern.
    pub fn full_match(&self, text: &str) -> bool {
        self.regex.as_ref().map(|re| re.is_match(text)).unwrap_or(true)
    }
}

/// Compile `pattern` anchored at both ends.
///
/// In verbose mode a trailing `# comment` runs to the end of the line and
/// would swallow the closing anchor, so the anchor then goes on a new line.
fn compile_full_match(column: &str, pattern: &str) -> SchemaResult<Regex> {
    let invalid = |e: regex_lite::Error| SchemaError::invalid_pattern(column, pattern, e.to_string());
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{})$", pattern))
        .or_else(|_| Regex::new(&format!("^(?:{}\n)$", pattern)))
        .map_err(invalid)
}

//! Schema configuration files.
//!
//! Column rules and structural expectations can be declared in JSON.
//! Cross checks are code and are attached to the returned builder.
//!
//! ```json
//! {
//!   "columns": [
//!     {"name": "Curriculum Id*", "allow_missing": false, "starts_with": "C"},
//!     {"name": "Course Credit Status (CB04)", "one_of": ["D", "C", "N"]}
//!   ],
//!   "expect": {"columns": 40},
//!   "cross_failure": "collect"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::builder::SchemaBuilder;
use crate::column::ColumnDef;
use crate::error::SchemaResult;
use crate::schema::{CrossFailurePolicy, StructuralExpectations};

/// Serializable schema configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Column definitions in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    /// Structural expectations.
    #[serde(default)]
    pub expect: StructuralExpectations,
    /// Cross check failure handling.
    #[serde(default)]
    pub cross_failure: CrossFailurePolicy,
}

impl SchemaConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as pretty JSON.
    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compile the configuration into a builder, ready for cross checks.
    pub fn into_builder(self) -> SchemaResult<SchemaBuilder> {
        let mut builder = SchemaBuilder::new();
        for def in self.columns {
            builder.add_column_def(def)?;
        }
        builder
            .expectations(self.expect)
            .on_cross_failure(self.cross_failure);
        Ok(builder)
    }
}

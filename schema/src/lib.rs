//! tabguard Schema
//!
//! Declarative description of what a valid dataset looks like.
//!
//! Responsibilities:
//! - Describe per-column rules (ColumnDef) and compile them once (ColumnSpec)
//! - Hold named cross-column checks
//! - Hold structural expectations (row count, column count, column order)
//! - Reject malformed configuration at construction time
//! - Load column rules from JSON configuration

mod builder;
mod column;
mod config;
mod cross;
mod error;
mod schema;
mod types;

pub use builder::{ColumnBuilder, SchemaBuilder};
pub use column::{ColumnDef, ColumnSpec};
pub use config::SchemaConfig;
pub use cross::{CrossCheck, CrossFn, KeyPart};
pub use error::{SchemaError, SchemaResult};
pub use schema::{CrossFailurePolicy, Schema, StructuralExpectations};
pub use types::{ColumnType, RuleKind, RuleSet};

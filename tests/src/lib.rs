//! tabguard Integration Tests
//!
//! Shared fixtures for the scenario tests under `tests/`: a small course
//! catalog dataset, the schema it is validated against and the catalog's
//! cross-column checks.


use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Prelude for convenient imports in test files.
pub mod prelude {
    pub use crate::catalog::{self, columns};
    pub use crate::init_tracing;
    pub use tabguard_core::{labels, values, Dataset, RowLabel, Value};
    pub use tabguard_schema::{
        ColumnType, CrossCheck, CrossFailurePolicy, KeyPart, RuleKind, Schema, SchemaBuilder,
        SchemaConfig, SchemaError,
    };
    pub use tabguard_validate::{
        validate, RuleOutcome, SchemaValidator, ValidateError, ValidationReport,
    };
}

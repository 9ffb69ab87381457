//! tabguard Validate
//!
//! Check datasets against a compiled schema.
//!
//! Responsibilities:
//! - Evaluate the enabled rules of each column
//! - Run cross-column checks and verify the rows they flag
//! - Check dataset shape against structural expectations
//! - Summarize violation counts per column and per cross check

mod error;
mod evaluator;
mod report;
mod structural;
mod summary;
mod validator;
mod violation;

pub use error::{ValidateError, ValidateResult};
pub use evaluator::{infer_type, ColumnEvaluator};
pub use report::{CrossFailure, CrossOutcome, ValidationReport};
pub use structural::{check_structure, StructuralCheck, StructuralFinding};
pub use summary::{ColumnSummary, CrossSummary};
pub use validator::{validate, SchemaValidator};
pub use violation::{RuleOutcome, TypeVerdict, ViolationReport};

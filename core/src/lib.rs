//! tabguard Core Types
//!
//! This crate provides the foundational types used throughout tabguard:
//! - Cell values (the Value enum and its hashable ValueKey)
//! - Row labels (RowLabel)
//! - The in-memory Dataset and borrowed ColumnSlice views
//! - Common error types

mod dataset;
mod error;
mod label;
mod value;

pub use dataset::*;
pub use error::*;
pub use label::*;
pub use value::*;

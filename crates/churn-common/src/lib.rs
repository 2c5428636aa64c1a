//! Shared utilities for the churn preprocessing crates.
//!
//! Currently this is Polars `AnyValue` plumbing used by both the transformer
//! stages and the output writer.

pub mod polars;

pub use polars::{any_to_f64, any_to_string, format_numeric, parse_f64};

//! Transformation core for the churn preprocessing pipeline.
//!
//! The stages mirror a standard tabular prep recipe: drop the identifier,
//! coerce the dirty numeric column, band tenure, label-encode the target,
//! standardize the numeric features, and expand the remaining categoricals
//! into drop-first indicators.

pub mod error;
pub mod executors;
pub mod pipeline;

pub use error::TransformError;
pub use pipeline::{TransformOutput, check_required_columns, transform};

//! Error types for the transformation core.

use polars::error::PolarsError;
use thiserror::Error;

/// Errors raised by the transformation pipeline.
///
/// Recoverable data issues (unparseable numeric strings) are handled inside
/// the stages with defined defaults and never surface here; only structural
/// problems abort the run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// A column the pipeline requires is absent from the input table.
    #[error("required column missing: {0}")]
    MissingColumn(String),

    /// An underlying DataFrame operation failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result type alias for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

//! Fitted parameters produced by the transformation stages.
//!
//! The label encoder and scaler are pure fit-then-transform functions; the
//! parameters they fit are returned to the caller so tests and reports can
//! inspect them directly.

use serde::{Deserialize, Serialize};

/// Mean and standard deviation fitted for one standardized column.
///
/// A `std_dev` of zero records a constant input column; the transformed
/// values for such a column are all zero rather than a division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub column: String,
    pub mean: f64,
    pub std_dev: f64,
}

//! Pipeline orchestration: runs the stages in their fixed order.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use churn_model::{PrepConfig, ScalerParams, schema};

use crate::error::{Result, TransformError};
use crate::executors;

/// The fully transformed table together with the fitted parameters and
/// bookkeeping gathered along the way.
#[derive(Debug)]
pub struct TransformOutput {
    /// The encoded, model-ready table. Every column is numeric.
    pub data: DataFrame,
    /// Target value to integer code assignment.
    pub target_mapping: BTreeMap<String, i64>,
    /// Fitted standardization parameters, one per numeric column.
    pub scalers: Vec<ScalerParams>,
    /// Number of cells defaulted to zero during numeric coercion.
    pub coerced_cells: usize,
    /// Names of the indicator columns produced by categorical expansion.
    pub indicator_columns: Vec<String>,
}

/// Verify that every column the pipeline depends on is present.
///
/// Runs before any stage mutates the table so a malformed input fails fast
/// with the first missing name.
pub fn check_required_columns(df: &DataFrame) -> Result<()> {
    for name in schema::REQUIRED_COLUMNS {
        if df.column(name).is_err() {
            return Err(TransformError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

/// Run the full preprocessing pipeline over a raw table.
///
/// Stage order is fixed: identifier drop, numeric coercion, tenure banding,
/// target encoding, standardization, categorical expansion. The input is
/// consumed; on error nothing of the partial state escapes.
pub fn transform(mut df: DataFrame, config: &PrepConfig) -> Result<TransformOutput> {
    let span = info_span!("transform", rows = df.height(), columns = df.width());
    let _guard = span.enter();

    check_required_columns(&df)?;

    executors::drop_identifier(&mut df, schema::IDENTIFIER_COLUMN)?;

    let coerced_cells = executors::coerce_numeric(&mut df, schema::TOTAL_CHARGES_COLUMN)?;

    executors::derive_tenure_group(
        &mut df,
        schema::TENURE_COLUMN,
        schema::TENURE_GROUP_COLUMN,
        &config.tenure_bins,
    )?;

    let target_mapping = executors::encode_target(&mut df, schema::TARGET_COLUMN)?;

    let mut scalers = Vec::with_capacity(schema::NUMERIC_COLUMNS.len());
    for column in schema::NUMERIC_COLUMNS {
        scalers.push(executors::standardize(&mut df, column)?);
    }

    let indicator_columns =
        executors::expand_categoricals(&mut df, &[schema::TARGET_COLUMN])?;
    debug!(
        indicators = indicator_columns.len(),
        "categorical expansion complete"
    );

    info!(
        rows = df.height(),
        columns = df.width(),
        coerced_cells,
        "pipeline complete"
    );

    Ok(TransformOutput {
        data: df,
        target_mapping,
        scalers,
        coerced_cells,
        indicator_columns,
    })
}

//! Stage executors for the preprocessing pipeline.
//!
//! Each executor mutates the working `DataFrame` in place and returns a small
//! amount of bookkeeping (counts or fitted parameters) for the run summary.
//! Stages never abort on malformed cell values; defined defaults apply.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{AnyValue, Column, DataFrame, DataType};
use tracing::{debug, warn};

use churn_common::polars::{any_to_f64, any_to_string};
use churn_model::{ScalerParams, TenureBins};

use crate::error::{Result, TransformError};

/// Remove an identifier column that carries no predictive signal.
///
/// A missing column is not an error; re-running the pipeline on already
/// cleaned data is a no-op for this stage.
pub fn drop_identifier(df: &mut DataFrame, column: &str) -> Result<bool> {
    if df.column(column).is_err() {
        debug!(column, "identifier column absent, nothing to drop");
        return Ok(false);
    }
    *df = df.drop(column)?;
    debug!(column, "identifier column dropped");
    Ok(true)
}

/// Coerce a column to `f64`, defaulting unparseable cells to zero.
///
/// Returns the number of cells that were defaulted.
pub fn coerce_numeric(df: &mut DataFrame, column: &str) -> Result<usize> {
    let height = df.height();
    let mut defaulted = 0usize;
    let values: Vec<f64> = {
        let series = df
            .column(column)
            .map_err(|_| TransformError::MissingColumn(column.to_string()))?;
        (0..height)
            .map(|idx| {
                match any_to_f64(series.get(idx).unwrap_or(AnyValue::Null)) {
                    Some(value) => value,
                    None => {
                        defaulted += 1;
                        0.0
                    }
                }
            })
            .collect()
    };
    if defaulted > 0 {
        warn!(column, defaulted, "non-numeric cells defaulted to zero");
    }
    df.with_column(Column::new(column.into(), values))?;
    Ok(defaulted)
}

/// Derive a categorical tenure band column from a numeric tenure column.
pub fn derive_tenure_group(
    df: &mut DataFrame,
    source: &str,
    target: &str,
    bins: &TenureBins,
) -> Result<()> {
    let height = df.height();
    let labels: Vec<String> = {
        let series = df
            .column(source)
            .map_err(|_| TransformError::MissingColumn(source.to_string()))?;
        (0..height)
            .map(|idx| {
                let value = any_to_f64(series.get(idx).unwrap_or(AnyValue::Null)).unwrap_or(0.0);
                bins.label_for(value).to_string()
            })
            .collect()
    };
    df.with_column(Column::new(target.into(), labels))?;
    debug!(source, target, "tenure band column derived");
    Ok(())
}

/// Replace a categorical target column with integer codes.
///
/// Codes are assigned in lexicographic order of the distinct values, so a
/// binary No/Yes target maps to 0/1. The returned mapping records the
/// assignment for the run summary.
pub fn encode_target(df: &mut DataFrame, column: &str) -> Result<BTreeMap<String, i64>> {
    let height = df.height();
    let (codes, mapping) = {
        let series = df
            .column(column)
            .map_err(|_| TransformError::MissingColumn(column.to_string()))?;
        let raw: Vec<String> = (0..height)
            .map(|idx| {
                any_to_string(series.get(idx).unwrap_or(AnyValue::Null))
                    .trim()
                    .to_string()
            })
            .collect();

        let distinct: BTreeSet<&str> = raw.iter().map(String::as_str).collect();
        let mapping: BTreeMap<String, i64> = distinct
            .into_iter()
            .enumerate()
            .map(|(code, value)| (value.to_string(), code as i64))
            .collect();

        let codes: Vec<i64> = raw.iter().map(|value| mapping[value.as_str()]).collect();
        (codes, mapping)
    };
    df.with_column(Column::new(column.into(), codes))?;
    debug!(column, classes = mapping.len(), "target label encoded");
    Ok(mapping)
}

/// Standardize a numeric column to zero mean and unit variance.
///
/// The fit uses the population standard deviation. A zero-variance column is
/// zero-filled and recorded with `std_dev = 0`, keeping the output finite.
pub fn standardize(df: &mut DataFrame, column: &str) -> Result<ScalerParams> {
    let height = df.height();
    let values: Vec<f64> = {
        let series = df
            .column(column)
            .map_err(|_| TransformError::MissingColumn(column.to_string()))?;
        (0..height)
            .map(|idx| any_to_f64(series.get(idx).unwrap_or(AnyValue::Null)).unwrap_or(0.0))
            .collect()
    };

    let params = fit_scaler(column, &values);
    let scaled: Vec<f64> = if params.std_dev == 0.0 {
        warn!(column, "zero variance column, standardized to all zeros");
        vec![0.0; height]
    } else {
        values
            .iter()
            .map(|value| (value - params.mean) / params.std_dev)
            .collect()
    };
    df.with_column(Column::new(column.into(), scaled))?;
    debug!(column, mean = params.mean, std_dev = params.std_dev, "column standardized");
    Ok(params)
}

fn fit_scaler(column: &str, values: &[f64]) -> ScalerParams {
    if values.is_empty() {
        return ScalerParams {
            column: column.to_string(),
            mean: 0.0,
            std_dev: 0.0,
        };
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    ScalerParams {
        column: column.to_string(),
        mean,
        std_dev: variance.sqrt(),
    }
}

/// Expand string-typed columns into drop-first indicator columns.
///
/// Every string column not named in `exclude` is replaced by one 0/1 column
/// per distinct value except the lexicographically first, which becomes the
/// implicit reference level. Returns the names of the indicator columns that
/// were added.
pub fn expand_categoricals(df: &mut DataFrame, exclude: &[&str]) -> Result<Vec<String>> {
    let categorical: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| {
            column.dtype() == &DataType::String && !exclude.contains(&column.name().as_str())
        })
        .map(|column| column.name().to_string())
        .collect();

    let mut added = Vec::new();
    for name in &categorical {
        let height = df.height();
        let raw: Vec<String> = {
            let series = df.column(name)?;
            (0..height)
                .map(|idx| any_to_string(series.get(idx).unwrap_or(AnyValue::Null)))
                .collect()
        };

        let distinct: BTreeSet<&str> = raw.iter().map(String::as_str).collect();
        // The first category in sort order is the reference level.
        for category in distinct.iter().skip(1) {
            let indicator: Vec<i32> = raw
                .iter()
                .map(|value| i32::from(value.as_str() == *category))
                .collect();
            let indicator_name = format!("{name}_{category}");
            df.with_column(Column::new(indicator_name.as_str().into(), indicator))?;
            added.push(indicator_name);
        }
        *df = df.drop(name)?;
        debug!(
            column = name.as_str(),
            indicators = distinct.len().saturating_sub(1),
            "categorical column expanded"
        );
    }
    Ok(added)
}

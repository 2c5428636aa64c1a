//! File-facing pipeline steps: raw input loading and encoded output writing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use tracing::{debug, info};

use churn_common::polars::any_to_string;
use churn_ingest::{acquire, read_raw_csv};
use churn_model::PrepConfig;

/// Load the raw dataset, either from an explicit local CSV or through the
/// download-and-extract acquisition path.
pub fn load_raw_frame(input: Option<&Path>, config: &PrepConfig) -> Result<DataFrame> {
    let df = match input {
        Some(path) => read_raw_csv(path)
            .with_context(|| format!("read input csv {}", path.display()))?,
        None => acquire(config).context("acquire dataset")?,
    };
    info!(rows = df.height(), columns = df.width(), "raw dataset loaded");
    Ok(df)
}

/// Write the encoded table as CSV with a header row.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// failed run never leaves a partial output and never clobbers a previous
/// successful one.
pub fn write_encoded_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
    }

    let tmp = path.with_extension("csv.tmp");
    match write_rows(df, &tmp) {
        Ok(()) => {
            fs::rename(&tmp, path)
                .with_context(|| format!("move output into place at {}", path.display()))?;
            info!(
                path = %path.display(),
                rows = df.height(),
                columns = df.width(),
                "encoded csv written"
            );
            Ok(())
        }
        Err(error) => {
            let _ = fs::remove_file(&tmp);
            Err(error)
        }
    }
}

fn write_rows(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("open {} for writing", path.display()))?;

    let names = df.get_column_names_owned();
    writer
        .write_record(names.iter().map(|name| name.as_str()))
        .context("write header row")?;

    let columns = df.get_columns();
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        writer.write_record(&record).context("write data row")?;
    }
    writer.flush().context("flush output")?;
    debug!(path = %path.display(), "rows written");
    Ok(())
}

//! CSV loading into a Polars `DataFrame`.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{AcquireError, Result};

/// Read a delimited text file with a header row into a `DataFrame`.
///
/// Also the entry point for test injection: passing a local synthetic CSV
/// here exercises the full pipeline without any network access.
pub fn read_raw_csv(path: &Path) -> Result<DataFrame> {
    let csv_error = |source| AcquireError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)?;

    Ok(df)
}

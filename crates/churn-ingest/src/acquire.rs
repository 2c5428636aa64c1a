//! End-to-end dataset acquisition.

use polars::prelude::DataFrame;
use tracing::{debug, info};

use churn_model::PrepConfig;

use crate::archive::extract_archive;
use crate::download::download_archive;
use crate::error::{AcquireError, Result};
use crate::reader::read_raw_csv;

/// Obtain the raw dataset as an in-memory table.
///
/// Downloads the archive, extracts it, and reads the expected CSV. When
/// `config.reuse_existing` is set and the CSV is already on disk, the
/// download and extraction are skipped.
pub fn acquire(config: &PrepConfig) -> Result<DataFrame> {
    let csv_path = config.csv_path();
    if config.reuse_existing && csv_path.is_file() {
        info!(path = %csv_path.display(), "reusing previously extracted csv");
        return read_raw_csv(&csv_path);
    }

    download_archive(&config.dataset_url, &config.archive_path)?;
    unpack_and_read(config)
}

/// Extract an already-downloaded archive and read the expected CSV.
///
/// Fails with [`AcquireError::DataUnavailable`] naming the expected location
/// when the CSV is absent after extraction.
pub fn unpack_and_read(config: &PrepConfig) -> Result<DataFrame> {
    let extracted = extract_archive(&config.archive_path, &config.data_dir)?;
    debug!(extracted, dir = %config.data_dir.display(), "archive extracted");

    let csv_path = config.csv_path();
    if !csv_path.is_file() {
        return Err(AcquireError::DataUnavailable { path: csv_path });
    }
    read_raw_csv(&csv_path)
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;

    use super::*;

    fn test_config(dir: &Path) -> PrepConfig {
        PrepConfig {
            archive_path: dir.join("archive.zip"),
            data_dir: dir.to_path_buf(),
            csv_name: "expected.csv".to_string(),
            ..PrepConfig::default()
        }
    }

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, contents) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn unpack_and_read_loads_the_expected_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_zip(&config.archive_path, &[("expected.csv", "tenure,Churn\n3,No\n")]);

        let df = unpack_and_read(&config).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn missing_csv_after_extraction_names_the_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_zip(&config.archive_path, &[("other.csv", "a,b\n1,2\n")]);

        let error = unpack_and_read(&config).unwrap_err();

        match error {
            AcquireError::DataUnavailable { path } => {
                assert_eq!(path, dir.path().join("expected.csv"));
            }
            other => panic!("expected DataUnavailable, got {other}"),
        }
    }

    #[test]
    fn acquire_reuses_an_existing_csv_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.reuse_existing = true;
        // An unroutable URL: the test fails if acquire tries the network.
        config.dataset_url = "http://127.0.0.1:1/never".to_string();
        fs::write(config.csv_path(), "tenure,Churn\n7,Yes\n9,No\n").unwrap();

        let df = acquire(&config).unwrap();

        assert_eq!(df.height(), 2);
    }
}

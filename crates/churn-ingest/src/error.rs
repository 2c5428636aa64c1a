//! Error types for dataset acquisition.

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

/// Errors that can occur while obtaining the raw dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AcquireError {
    /// The archive could not be fetched from the source URL.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The downloaded archive could not be opened or extracted.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The expected CSV was absent after extraction. Carries the location
    /// the pipeline looked at so the failure can be diagnosed.
    #[error("dataset unavailable: expected csv at {}", .path.display())]
    DataUnavailable { path: PathBuf },

    /// The CSV exists but could not be parsed into a table.
    #[error("failed to read csv {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// I/O error during file operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for acquisition operations.
pub type Result<T> = std::result::Result<T, AcquireError>;

//! Immutable pipeline configuration.
//!
//! Everything that was a module-level constant in earlier incarnations of the
//! pipeline (source URL, on-disk paths, bin edges) lives here so tests can
//! inject synthetic tables and scratch directories without touching the
//! network.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default archive URL for the Telco customer-churn dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://www.kaggle.com/api/v1/datasets/download/blastchar/telco-customer-churn";

/// Name of the CSV expected inside the downloaded archive.
pub const DEFAULT_CSV_NAME: &str = "WA_Fn-UseC_-Telco-Customer-Churn.csv";

/// Configuration for a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// URL of the compressed dataset archive.
    pub dataset_url: String,
    /// Where the downloaded archive is written. Re-runs overwrite it.
    pub archive_path: PathBuf,
    /// Directory the archive is extracted into.
    pub data_dir: PathBuf,
    /// File name of the CSV expected after extraction.
    pub csv_name: String,
    /// Path of the encoded output CSV.
    pub output_path: PathBuf,
    /// Skip download and extraction when the extracted CSV already exists.
    pub reuse_existing: bool,
    /// Tenure bin edges and labels for the derived TenureGroup column.
    pub tenure_bins: TenureBins,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            archive_path: PathBuf::from("data/telco-customer-churn.zip"),
            data_dir: PathBuf::from("data"),
            csv_name: DEFAULT_CSV_NAME.to_string(),
            output_path: PathBuf::from("telco_preprocessed/telco_churn_clean.csv"),
            reuse_existing: false,
            tenure_bins: TenureBins::default(),
        }
    }
}

impl PrepConfig {
    /// Full path of the CSV expected after extraction.
    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_name)
    }
}

/// Ordered tenure bins: `labels[i]` covers `(edges[i], edges[i + 1]]`, with
/// the first bin inclusive of its lower edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureBins {
    pub edges: Vec<f64>,
    pub labels: Vec<String>,
}

impl Default for TenureBins {
    fn default() -> Self {
        Self {
            edges: vec![0.0, 12.0, 48.0, 72.0],
            labels: vec![
                "New".to_string(),
                "Existing".to_string(),
                "Loyal".to_string(),
            ],
        }
    }
}

impl TenureBins {
    /// Label for a tenure value. Boundary values belong to the lower bin and
    /// the last bin is open-ended, so every value receives exactly one label.
    pub fn label_for(&self, value: f64) -> &str {
        for (idx, upper) in self.edges.iter().skip(1).enumerate() {
            if value <= *upper {
                return &self.labels[idx];
            }
        }
        self.labels.last().map(String::as_str).unwrap_or_default()
    }
}

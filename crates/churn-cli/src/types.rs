use std::collections::BTreeMap;
use std::path::PathBuf;

use churn_model::ScalerParams;

#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    pub output_path: Option<PathBuf>,
    pub target_mapping: BTreeMap<String, i64>,
    pub scalers: Vec<ScalerParams>,
    pub indicator_columns: usize,
    pub coerced_cells: usize,
}

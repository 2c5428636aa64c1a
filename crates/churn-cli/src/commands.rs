use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use churn_cli::pipeline::{load_raw_frame, write_encoded_csv};
use churn_model::{PrepConfig, schema};
use churn_transform::transform;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunSummary;

pub fn run_prep(args: &RunArgs) -> Result<RunSummary> {
    let config = build_config(args);
    let run_span = info_span!("run", dry_run = args.dry_run);
    let _run_guard = run_span.enter();

    let load_start = Instant::now();
    let raw = load_raw_frame(args.input.as_deref(), &config)?;
    info!(
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let transform_start = Instant::now();
    let output = transform(raw, &config).context("transform dataset")?;
    info!(
        rows = output.data.height(),
        columns = output.data.width(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let output_path = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        write_encoded_csv(&output.data, &config.output_path)
            .with_context(|| format!("write output {}", config.output_path.display()))?;
        Some(config.output_path.clone())
    };

    Ok(RunSummary {
        rows: output.data.height(),
        columns: output.data.width(),
        output_path,
        target_mapping: output.target_mapping,
        scalers: output.scalers,
        indicator_columns: output.indicator_columns.len(),
        coerced_cells: output.coerced_cells,
    })
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Role", "Treatment"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        schema::IDENTIFIER_COLUMN,
        "identifier",
        "dropped",
    ]);
    table.add_row(vec![
        schema::TENURE_COLUMN,
        "numeric feature",
        "standardized, also banded into tenure groups",
    ]);
    table.add_row(vec![
        schema::MONTHLY_CHARGES_COLUMN,
        "numeric feature",
        "standardized",
    ]);
    table.add_row(vec![
        schema::TOTAL_CHARGES_COLUMN,
        "numeric feature",
        "coerced to numeric (blanks default to 0), standardized",
    ]);
    table.add_row(vec![
        schema::TENURE_GROUP_COLUMN,
        "derived categorical",
        "expanded into drop-first indicators",
    ]);
    table.add_row(vec![
        schema::TARGET_COLUMN,
        "target",
        "label encoded to integer codes",
    ]);
    table.add_row(vec![
        "(other text columns)",
        "categorical feature",
        "expanded into drop-first indicators",
    ]);
    println!("{table}");
    Ok(())
}

fn build_config(args: &RunArgs) -> PrepConfig {
    let mut config = PrepConfig::default();
    if let Some(url) = &args.url {
        config.dataset_url = url.clone();
    }
    if let Some(dir) = &args.data_dir {
        config.archive_path = dir.join("telco-customer-churn.zip");
        config.data_dir = dir.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    config.reuse_existing = args.reuse_existing;
    config
}

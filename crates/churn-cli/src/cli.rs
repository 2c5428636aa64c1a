//! CLI argument definitions for the churn preprocessing tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "churn-prep",
    version,
    about = "Telco churn preprocessing - clean and encode the customer churn dataset",
    long_about = "Clean and encode the Telco customer churn dataset into a \
                  model-ready table.\n\n\
                  Downloads the archived dataset (or reads a local CSV), drops the \
                  customer identifier, repairs the TotalCharges column, bands tenure, \
                  label-encodes the churn target, standardizes the numeric features, \
                  and expands the categorical columns into drop-first indicators."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full preprocessing pipeline and write the encoded CSV.
    Run(RunArgs),

    /// List the column roles the pipeline recognizes.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Read the raw dataset from a local CSV instead of downloading it.
    #[arg(long = "input", value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Directory for the downloaded archive and extracted files.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path of the encoded output CSV (default: telco_preprocessed/telco_churn_clean.csv).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dataset archive URL to download.
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Skip the download when the extracted CSV is already present.
    #[arg(long = "reuse-existing")]
    pub reuse_existing: bool,

    /// Transform and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

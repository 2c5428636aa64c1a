//! Data model definitions for the churn preprocessing pipeline.
//!
//! This crate is intentionally dependency-light: it defines the fixed column
//! schema of the Telco customer dataset, the immutable pipeline configuration,
//! and the fitted-parameter types returned by the transformation stages.

pub mod config;
pub mod params;
pub mod schema;

pub use config::{PrepConfig, TenureBins};
pub use params::ScalerParams;

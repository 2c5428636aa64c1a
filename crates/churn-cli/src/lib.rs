//! CLI library components for the churn preprocessing tool.

pub mod logging;
pub mod pipeline;

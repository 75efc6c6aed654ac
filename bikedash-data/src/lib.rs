//! Table loading and aggregation for the bikedash dashboard
//!
//! This crate reads the externally supplied CSV tables into typed rows and
//! derives the per-month, per-weekday and correlation summaries the chart
//! layer consumes. All aggregation functions are pure over their inputs.

pub mod aggregate;
pub mod loader;

pub use aggregate::{correlation_matrix, monthly_summary, weekday_summary};
pub use loader::{available_years, read_daily_records, read_feature_table, read_monthly_summary};

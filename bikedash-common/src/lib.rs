//! Common utilities and types for the bikedash dashboard

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{DashboardError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use types::{
    weekday_label, CorrelationMatrix, DailyRecord, FeatureTable, MonthlySummary, Season,
    WeekdaySummary, YearSelection,
};

//! # bikedash-charts
//!
//! Chart descriptions and rendering for the bikedash dashboard.
//!
//! Each chart module exposes a pure builder from a prepared table to a
//! serializable chart description, plus plotters-based rendering of that
//! description to a PNG file.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod correlation_heatmap;
pub mod renderer;
pub mod seasonal_trend;
pub mod temperature_scatter;
pub mod types;
pub mod weekday_breakdown;

pub use correlation_heatmap::{CorrelationHeatmapChart, HeatmapCell};
pub use renderer::ChartRenderer;
pub use seasonal_trend::{MonthBand, SeasonalTrendChart, SEASON_LEGEND_CAPTION};
pub use temperature_scatter::{ScatterPoint, TemperatureScatterChart};
pub use types::{ChartArtifact, ChartConfig, FontConfig, MarginConfig, StyleConfig, MONTH_LABELS};
pub use weekday_breakdown::WeekdayBreakdownChart;

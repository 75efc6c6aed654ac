//! Dashboard controller: owns the loaded tables and runs the fixed render
//! sequence for the current year selection

use crate::narrative;
use bikedash_charts::{
    ChartArtifact, CorrelationHeatmapChart, SeasonalTrendChart, TemperatureScatterChart,
    WeekdayBreakdownChart,
};
use bikedash_common::{
    DailyRecord, DashboardError, FeatureTable, Result, YearSelection,
};
use bikedash_data::{
    available_years, correlation_matrix, monthly_summary, read_daily_records, read_feature_table,
    weekday_summary,
};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Raw tables loaded once per process; immutable afterwards
#[derive(Debug)]
pub struct LoadedTables {
    pub daily: Vec<DailyRecord>,
    /// Feature table, or the load failure kept for the heatmap slot
    pub features: std::result::Result<FeatureTable, String>,
}

impl LoadedTables {
    /// Load the input tables. A missing daily table is fatal because every
    /// chart depends on it; a feature table failure only disables the
    /// heatmap slot.
    pub fn load(daily_path: &Path, feature_path: &Path) -> Result<Self> {
        let daily = read_daily_records(daily_path)?;
        let features = read_feature_table(feature_path).map_err(|err| {
            warn!(error = %err, "feature table unavailable, heatmap will be skipped");
            err.to_string()
        });
        Ok(Self { daily, features })
    }

    pub fn available_years(&self) -> Vec<i32> {
        available_years(&self.daily)
    }
}

/// Controller lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Data in memory, no render in progress
    Loaded,
    /// Actively producing the fixed chart sequence
    Rendering,
}

/// One element of the rendered dashboard, in display order
#[derive(Debug, Clone)]
pub enum DashboardSlot {
    /// Static narrative text block
    Narrative { heading: String, body: String },
    /// A successfully built chart description
    Chart(ChartArtifact),
    /// A chart slot whose build failed; shown as a visible message instead
    Failed { title: String, message: String },
}

/// Orchestrates loading, aggregation and chart building for one selection
#[derive(Debug)]
pub struct DashboardController {
    tables: LoadedTables,
    state: ControllerState,
}

impl DashboardController {
    pub fn new(tables: LoadedTables) -> Self {
        Self {
            tables,
            state: ControllerState::Loaded,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn available_years(&self) -> Vec<i32> {
        self.tables.available_years()
    }

    /// Default selection: the first (lowest) year in the daily table
    pub fn default_selection(&self) -> Result<YearSelection> {
        YearSelection::first_available(&self.available_years())
            .ok_or_else(|| DashboardError::selection("daily table contains no years"))
    }

    /// Validate an explicit year choice against the available set
    pub fn select_year(&self, year: i32) -> Result<YearSelection> {
        if self.available_years().contains(&year) {
            Ok(YearSelection::new(year))
        } else {
            Err(DashboardError::selection_year(
                format!("year {year} is not in the available set"),
                year,
            ))
        }
    }

    /// Run one full synchronous render pass for the given selection.
    ///
    /// The sequence is fixed; a failure in one chart becomes a Failed slot
    /// and never aborts the remaining charts.
    #[instrument(skip(self))]
    pub fn render_pass(&mut self, selection: YearSelection) -> Vec<DashboardSlot> {
        self.state = ControllerState::Rendering;
        let year = selection.year();
        info!(year, "starting dashboard render pass");

        let mut slots = Vec::new();

        slots.push(DashboardSlot::Narrative {
            heading: narrative::DASHBOARD_TITLE.to_string(),
            body: narrative::INTRO.to_string(),
        });

        slots.push(chart_slot("Bike Rentals Over the Months", || {
            let summary = monthly_summary(&self.tables.daily, year);
            if summary.is_empty() {
                debug!(year, "no records for selected year, seasonal trend is a placeholder");
            }
            Ok(ChartArtifact::SeasonalTrend(
                SeasonalTrendChart::from_monthly_summary(year, &summary),
            ))
        }));

        slots.push(chart_slot("Correlation Heatmap", || {
            let features = self
                .tables
                .features
                .as_ref()
                .map_err(|msg| DashboardError::render(msg.clone()))?;
            let matrix = correlation_matrix(features)?;
            Ok(ChartArtifact::CorrelationHeatmap(
                CorrelationHeatmapChart::from_matrix(&matrix)?,
            ))
        }));

        slots.push(DashboardSlot::Narrative {
            heading: "Correlation Heatmap Analysis".to_string(),
            body: narrative::HEATMAP_ANALYSIS.to_string(),
        });

        slots.push(chart_slot("Bike Usage by Month with Temperature", || {
            Ok(ChartArtifact::TemperatureScatter(
                TemperatureScatterChart::from_daily_records(year, &self.tables.daily),
            ))
        }));

        slots.push(chart_slot("Casual vs Registered Users by Weekday", || {
            let summary = weekday_summary(&self.tables.daily);
            Ok(ChartArtifact::WeekdayBreakdown(
                WeekdayBreakdownChart::from_weekday_summary(&summary),
            ))
        }));

        slots.push(DashboardSlot::Narrative {
            heading: "Weekday Usage".to_string(),
            body: narrative::WEEKDAY_ANALYSIS.to_string(),
        });

        slots.push(DashboardSlot::Narrative {
            heading: "Conclusion".to_string(),
            body: narrative::CONCLUSION.to_string(),
        });

        info!(year, slots = slots.len(), "dashboard render pass complete");
        self.state = ControllerState::Loaded;
        slots
    }
}

/// Build one chart slot, isolating failures to a visible message
fn chart_slot(title: &str, build: impl FnOnce() -> Result<ChartArtifact>) -> DashboardSlot {
    match build() {
        Ok(artifact) => DashboardSlot::Chart(artifact),
        Err(err) => {
            warn!(chart = title, error = %err, "chart build failed, continuing with remaining charts");
            DashboardSlot::Failed {
                title: title.to_string(),
                message: err.to_string(),
            }
        }
    }
}

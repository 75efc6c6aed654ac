//! Chart configuration types and the artifact wrapper

use crate::{
    CorrelationHeatmapChart, SeasonalTrendChart, TemperatureScatterChart, WeekdayBreakdownChart,
};
use bikedash_common::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed month tick labels, used regardless of data gaps
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub style: StyleConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 50,
            left: 70,
        }
    }
}

/// Styling configuration shared by all chart kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub background_color: String,
    pub title_font: FontConfig,
    pub label_font: FontConfig,
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 24,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}

/// One rendered chart description, ready for the display surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChartArtifact {
    SeasonalTrend(SeasonalTrendChart),
    CorrelationHeatmap(CorrelationHeatmapChart),
    TemperatureScatter(TemperatureScatterChart),
    WeekdayBreakdown(WeekdayBreakdownChart),
}

impl ChartArtifact {
    /// Stable identifier for the chart kind, used for output file names
    pub fn name(&self) -> &'static str {
        use crate::ChartRenderer;
        match self {
            Self::SeasonalTrend(chart) => chart.name(),
            Self::CorrelationHeatmap(chart) => chart.name(),
            Self::TemperatureScatter(chart) => chart.name(),
            Self::WeekdayBreakdown(chart) => chart.name(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::SeasonalTrend(chart) => &chart.title,
            Self::CorrelationHeatmap(chart) => &chart.title,
            Self::TemperatureScatter(chart) => &chart.title,
            Self::WeekdayBreakdown(chart) => &chart.title,
        }
    }

    /// Caption text accompanying the chart, if any
    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::SeasonalTrend(chart) => Some(chart.caption.as_str()),
            _ => None,
        }
    }

    pub fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        use crate::ChartRenderer;
        match self {
            Self::SeasonalTrend(chart) => chart.render_to_file(config, path),
            Self::CorrelationHeatmap(chart) => chart.render_to_file(config, path),
            Self::TemperatureScatter(chart) => chart.render_to_file(config, path),
            Self::WeekdayBreakdown(chart) => chart.render_to_file(config, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 1000);
        assert_eq!(config.height, 600);
        assert_eq!(config.style.background_color, "#FFFFFF");
    }

    #[test]
    fn test_month_labels_fixed() {
        assert_eq!(MONTH_LABELS.len(), 12);
        assert_eq!(MONTH_LABELS[0], "Jan");
        assert_eq!(MONTH_LABELS[11], "Dec");
    }
}

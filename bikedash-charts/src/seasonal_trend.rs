//! Seasonal time series: monthly rental totals over season-colored bands

use crate::{color, ChartConfig, ChartRenderer, MONTH_LABELS};
use bikedash_common::{MonthlySummary, Result, Season};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Static caption describing the band color legend
pub const SEASON_LEGEND_CAPTION: &str = "Background colors represent seasonal changes: \
Spring (Light Blue) | Summer (Light Green) | Fall (Pink) | Winter (Peach)";

/// Background band for one month, colored by that month's modal season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBand {
    pub month: u32,
    pub season: Season,
}

/// Line chart of monthly rental totals with seasonal background bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalTrendChart {
    pub title: String,
    /// (month, total_count) pairs, ascending by month
    pub points: Vec<(u32, u64)>,
    pub bands: Vec<MonthBand>,
    pub caption: String,
}

impl SeasonalTrendChart {
    /// Build the chart description from a monthly summary. An empty summary
    /// (year with no records) yields a placeholder chart with axes only.
    pub fn from_monthly_summary(year: i32, summary: &[MonthlySummary]) -> Self {
        Self {
            title: format!("Bike Rentals Over the Months ({year})"),
            points: summary.iter().map(|row| (row.month, row.total_count)).collect(),
            bands: summary
                .iter()
                .map(|row| MonthBand {
                    month: row.month,
                    season: row.season,
                })
                .collect(),
            caption: SEASON_LEGEND_CAPTION.to_string(),
        }
    }

    fn y_max(&self) -> f64 {
        self.points
            .iter()
            .map(|&(_, count)| count as f64)
            .fold(0.0, f64::max)
            .max(10.0)
            * 1.1
    }
}

impl ChartRenderer for SeasonalTrendChart {
    fn name(&self) -> &'static str {
        "seasonal_trend"
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let y_max = self.y_max();
        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, title_font)
            .margin(config.style.margins.top as i32)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(0.5f64..12.5f64, 0.0f64..y_max)?;

        // Season bands go under the grid and the series
        chart.draw_series(self.bands.iter().map(|band| {
            let m = f64::from(band.month);
            Rectangle::new(
                [(m - 0.5, 0.0), (m + 0.5, y_max)],
                color::season_band(band.season).mix(0.3).filled(),
            )
        }))?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Month"))
            .y_desc(config.y_label.as_deref().unwrap_or("Total Count"))
            .x_labels(12)
            .x_label_formatter(&|x| {
                let month = x.round() as usize;
                if (1..=12).contains(&month) && (x - month as f64).abs() < 0.25 {
                    MONTH_LABELS[month - 1].to_string()
                } else {
                    String::new()
                }
            })
            .draw()?;

        let line_points: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|&(month, count)| (f64::from(month), count as f64))
            .collect();

        chart
            .draw_series(LineSeries::new(line_points.clone(), &BLUE))?
            .label("Total Rentals")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));
        chart.draw_series(
            line_points
                .iter()
                .map(|&point| Circle::new(point, 4, BLUE.filled())),
        )?;

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        info!(path = %path.display(), "rendered seasonal trend chart");
        Ok(())
    }
}

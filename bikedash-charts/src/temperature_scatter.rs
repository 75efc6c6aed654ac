//! Temperature scatter: daily totals per month, colored by temperature

use crate::{color, ChartConfig, ChartRenderer, MONTH_LABELS};
use bikedash_common::{DailyRecord, Result};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One daily observation plotted against its month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub month: u32,
    pub count: u32,
    /// Normalized temperature in [0, 1], mapped through the diverging colormap
    pub temp: f64,
}

/// Scatter of daily rental totals by month with temperature color coding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
    pub colorbar_label: String,
}

impl TemperatureScatterChart {
    /// Build the chart description from daily records filtered to one year.
    /// A year with no records yields a placeholder chart with axes only.
    pub fn from_daily_records(year: i32, records: &[DailyRecord]) -> Self {
        Self {
            title: format!("Bike Rentals per Month with Temperature Indication ({year})"),
            points: records
                .iter()
                .filter(|r| r.year() == year)
                .map(|r| ScatterPoint {
                    month: r.month(),
                    count: r.total,
                    temp: r.temp,
                })
                .collect(),
            colorbar_label: "Normalized Temperature 0-1".to_string(),
        }
    }

    fn y_max(&self) -> f64 {
        self.points
            .iter()
            .map(|p| f64::from(p.count))
            .fold(0.0, f64::max)
            .max(10.0)
            * 1.1
    }
}

impl ChartRenderer for TemperatureScatterChart {
    fn name(&self) -> &'static str {
        "temperature_scatter"
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        // Reserve a strip on the right for the color bar
        let (main, bar) = root.split_horizontally(config.width as i32 - 110);

        let y_max = self.y_max();
        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&main)
            .caption(&self.title, title_font)
            .margin(config.style.margins.top as i32)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(0.5f64..12.5f64, 0.0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Month"))
            .y_desc(config.y_label.as_deref().unwrap_or("Total Bike Rentals (cnt)"))
            .x_labels(12)
            // Fixed Jan..Dec ticks regardless of data gaps
            .x_label_formatter(&|x| {
                let month = x.round() as usize;
                if (1..=12).contains(&month) && (x - month as f64).abs() < 0.25 {
                    MONTH_LABELS[month - 1].to_string()
                } else {
                    String::new()
                }
            })
            .draw()?;

        chart.draw_series(self.points.iter().map(|point| {
            Circle::new(
                (f64::from(point.month), f64::from(point.count)),
                4,
                color::diverging(point.temp).mix(0.75).filled(),
            )
        }))?;

        // Color bar: vertical gradient with a reference label
        let mut cbar = ChartBuilder::on(&bar)
            .margin_top(config.style.margins.top as i32 + 40)
            .margin_bottom(config.style.margins.bottom as i32)
            .margin_right(10)
            .set_label_area_size(LabelAreaPosition::Right, 40)
            .build_cartesian_2d(0.0f64..1.0f64, 0.0f64..1.0f64)?;
        cbar.configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_labels(5)
            .draw()?;
        cbar.draw_series((0..100).map(|step| {
            let t = f64::from(step) / 100.0;
            Rectangle::new([(0.0, t), (1.0, t + 0.01)], color::diverging(t).filled())
        }))?;
        let label_font = (
            config.style.label_font.family.as_str(),
            config.style.label_font.size,
        )
            .into_font()
            .transform(FontTransform::Rotate90);
        bar.draw(&Text::new(self.colorbar_label.as_str(), (12, 60), label_font))?;

        root.present()?;
        info!(path = %path.display(), points = self.points.len(), "rendered temperature scatter");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikedash_common::Season;
    use chrono::NaiveDate;

    fn record(date: &str, temp: f64, total: u32) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            season: Season::Spring,
            weekday: 0,
            temp,
            windspeed: 0.2,
            casual: 0,
            registered: total,
            total,
        }
    }

    #[test]
    fn test_builder_filters_by_year() {
        let records = vec![
            record("2011-01-01", 0.2, 985),
            record("2011-07-04", 0.8, 4500),
            record("2012-07-04", 0.9, 6000),
        ];

        let chart = TemperatureScatterChart::from_daily_records(2011, &records);
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].month, 1);
        assert_eq!(chart.points[1].count, 4500);
        assert_eq!(chart.title, "Bike Rentals per Month with Temperature Indication (2011)");
        assert_eq!(chart.colorbar_label, "Normalized Temperature 0-1");
    }

    #[test]
    fn test_absent_year_builds_placeholder() {
        let records = vec![record("2011-01-01", 0.2, 985)];
        let chart = TemperatureScatterChart::from_daily_records(2015, &records);
        assert!(chart.is_empty());
        assert!(chart.y_max() > 0.0);
    }

    #[test]
    fn test_points_carry_normalized_temperature() {
        let records = vec![record("2011-06-01", 0.63, 3000)];
        let chart = TemperatureScatterChart::from_daily_records(2011, &records);
        assert!((chart.points[0].temp - 0.63).abs() < 1e-9);
    }
}

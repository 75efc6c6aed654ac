//! Weekday breakdown: grouped casual/registered bars with a total overlay line

use crate::{color, ChartConfig, ChartRenderer};
use bikedash_common::{weekday_label, Result, WeekdaySummary};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const CASUAL_COLOR: &str = "#87CEEB"; // skyblue
const REGISTERED_COLOR: &str = "#FA8072"; // salmon

/// Grouped bar chart of casual vs registered rentals per weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayBreakdownChart {
    pub title: String,
    /// One row per weekday present, always Monday-first
    pub rows: Vec<WeekdaySummary>,
}

impl WeekdayBreakdownChart {
    /// Build the chart description from the weekday summary. Rows are
    /// re-sorted Monday-first so the category order is fixed regardless of
    /// input order.
    pub fn from_weekday_summary(summary: &[WeekdaySummary]) -> Self {
        let mut rows = summary.to_vec();
        rows.sort_by_key(|row| row.weekday);
        Self {
            title: "Total Casual vs Registered Bike Rentals by Weekday".to_string(),
            rows,
        }
    }

    fn y_max(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.total_count as f64)
            .fold(0.0, f64::max)
            .max(10.0)
            * 1.15
    }
}

impl ChartRenderer for WeekdayBreakdownChart {
    fn name(&self) -> &'static str {
        "weekday_breakdown"
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
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
            // Extra headroom for the legend row between title and plot
            .margin_top(config.style.margins.top as i32 + 26)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(-0.5f64..6.5f64, 0.0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Weekday"))
            .y_desc(config.y_label.as_deref().unwrap_or("Total Bike Rentals"))
            .x_labels(7)
            // Fixed Monday..Sunday category order
            .x_label_formatter(&|x| {
                let day = x.round();
                if (x - day).abs() < 0.25 && (0.0..=6.0).contains(&day) {
                    weekday_label(day as u8).to_string()
                } else {
                    String::new()
                }
            })
            .draw()?;

        let casual = color::parse_color(CASUAL_COLOR);
        let registered = color::parse_color(REGISTERED_COLOR);
        const BAR_WIDTH: f64 = 0.4;

        chart.draw_series(self.rows.iter().map(|row| {
            let x = f64::from(row.weekday);
            Rectangle::new(
                [(x - BAR_WIDTH, 0.0), (x, row.total_casual as f64)],
                casual.filled(),
            )
        }))?;

        chart.draw_series(self.rows.iter().map(|row| {
            let x = f64::from(row.weekday);
            Rectangle::new(
                [(x, 0.0), (x + BAR_WIDTH, row.total_registered as f64)],
                registered.filled(),
            )
        }))?;

        let line_points: Vec<(f64, f64)> = self
            .rows
            .iter()
            .map(|row| (f64::from(row.weekday), row.total_count as f64))
            .collect();
        chart.draw_series(LineSeries::new(line_points.clone(), &BLACK))?;
        chart.draw_series(
            line_points
                .iter()
                .map(|&point| Circle::new(point, 3, BLACK.filled())),
        )?;

        // Legend row between the title and the plot area
        let legend_font = (
            config.style.label_font.family.as_str(),
            config.style.label_font.size,
        )
            .into_font();
        let entries: [(&str, RGBColor); 3] = [
            ("Casual", casual),
            ("Registered", registered),
            ("Total Count", RGBColor(0, 0, 0)),
        ];
        let legend_y = config.style.title_font.size as i32 + config.style.margins.top as i32 + 10;
        let mut legend_x = config.width as i32 / 2 - 180;
        for (label, swatch) in entries {
            root.draw(&Rectangle::new(
                [(legend_x, legend_y - 6), (legend_x + 14, legend_y + 6)],
                swatch.filled(),
            ))?;
            root.draw(&Text::new(
                label,
                (legend_x + 20, legend_y - 7),
                legend_font.clone(),
            ))?;
            legend_x += 130;
        }

        root.present()?;
        info!(path = %path.display(), weekdays = self.rows.len(), "rendered weekday breakdown");
        Ok(())
    }
}

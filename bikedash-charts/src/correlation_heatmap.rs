//! Correlation heatmap: diverging-colored cells with numeric annotations

use crate::{color, ChartConfig, ChartRenderer};
use bikedash_common::{CorrelationMatrix, DashboardError, Result};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One annotated heatmap cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub row: usize,
    pub col: usize,
    pub value: f64,
    /// Coefficient formatted to 2 decimal places
    pub annotation: String,
}

/// Square heatmap of Pearson coefficients over the feature columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationHeatmapChart {
    pub title: String,
    pub labels: Vec<String>,
    pub cells: Vec<HeatmapCell>,
}

impl CorrelationHeatmapChart {
    /// Build the chart description from a correlation matrix. The matrix
    /// must satisfy its structural invariants (square, symmetric, unit
    /// diagonal, coefficients in [-1, 1]).
    pub fn from_matrix(matrix: &CorrelationMatrix) -> Result<Self> {
        if matrix.is_empty() {
            return Err(DashboardError::render("correlation matrix is empty"));
        }
        matrix
            .validate()
            .map_err(|msg| DashboardError::render(format!("invalid correlation matrix: {msg}")))?;

        let n = matrix.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let value = matrix.get(row, col);
                cells.push(HeatmapCell {
                    row,
                    col,
                    value,
                    annotation: format!("{value:.2}"),
                });
            }
        }

        Ok(Self {
            title: "Correlation Heatmap".to_string(),
            labels: matrix.labels.clone(),
            cells,
        })
    }

    /// Matrix side length
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl ChartRenderer for CorrelationHeatmapChart {
    fn name(&self) -> &'static str {
        "correlation_heatmap"
    }

    fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.background_color(config))?;

        let n = self.len();
        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, title_font)
            .margin(config.style.margins.top as i32)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left + 30)
            .build_cartesian_2d(
                (0..n).into_segmented(),
                (0..n).into_segmented(),
            )?;

        let labels = self.labels.clone();
        let y_labels = self.labels.clone();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_label_formatter(&move |seg| match seg {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            // First matrix row sits at the top
            .y_label_formatter(&move |seg| match seg {
                SegmentValue::CenterOf(i) => {
                    y_labels.get(n - 1 - *i).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .x_labels(n)
            .y_labels(n)
            .draw()?;

        chart.draw_series(self.cells.iter().map(|cell| {
            let y = n - 1 - cell.row;
            Rectangle::new(
                [
                    (SegmentValue::Exact(cell.col), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(cell.col + 1), SegmentValue::Exact(y + 1)),
                ],
                color::diverging_signed(cell.value).filled(),
            )
        }))?;

        let centered = plotters::style::text_anchor::Pos::new(
            plotters::style::text_anchor::HPos::Center,
            plotters::style::text_anchor::VPos::Center,
        );
        let annotation_font = TextStyle::from(
            (
                config.style.label_font.family.as_str(),
                config.style.label_font.size,
            )
                .into_font(),
        )
        .pos(centered);
        chart.draw_series(self.cells.iter().map(|cell| {
            let y = n - 1 - cell.row;
            // Dark annotation on light cells, light on saturated ones
            let style = if cell.value.abs() > 0.6 {
                annotation_font.color(&WHITE)
            } else {
                annotation_font.color(&BLACK)
            };
            Text::new(
                cell.annotation.clone(),
                (SegmentValue::CenterOf(cell.col), SegmentValue::CenterOf(y)),
                style,
            )
        }))?;

        root.present()?;
        info!(path = %path.display(), features = n, "rendered correlation heatmap");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CorrelationMatrix {
        CorrelationMatrix {
            labels: vec!["temp".into(), "windspeed".into(), "cnt".into()],
            values: vec![
                vec![1.0, -0.15, 0.33],
                vec![-0.15, 1.0, -0.23],
                vec![0.33, -0.23, 1.0],
            ],
        }
    }

    #[test]
    fn test_builder_annotates_to_two_decimals() {
        let chart = CorrelationHeatmapChart::from_matrix(&matrix()).unwrap();
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.cells.len(), 9);

        let cell = chart
            .cells
            .iter()
            .find(|c| c.row == 0 && c.col == 2)
            .unwrap();
        assert_eq!(cell.annotation, "0.33");

        let diagonal = chart
            .cells
            .iter()
            .find(|c| c.row == 1 && c.col == 1)
            .unwrap();
        assert_eq!(diagonal.annotation, "1.00");
    }

    #[test]
    fn test_builder_preserves_symmetry() {
        let chart = CorrelationHeatmapChart::from_matrix(&matrix()).unwrap();
        let upper = chart.cells.iter().find(|c| c.row == 0 && c.col == 1).unwrap();
        let lower = chart.cells.iter().find(|c| c.row == 1 && c.col == 0).unwrap();
        assert_eq!(upper.annotation, lower.annotation);
    }

    #[test]
    fn test_invalid_matrix_is_render_error() {
        let broken = CorrelationMatrix {
            labels: vec!["a".into(), "b".into()],
            values: vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        };
        let err = CorrelationHeatmapChart::from_matrix(&broken).unwrap_err();
        assert!(matches!(err, DashboardError::Render { .. }));
    }

    #[test]
    fn test_empty_matrix_is_render_error() {
        let empty = CorrelationMatrix {
            labels: vec![],
            values: vec![],
        };
        assert!(CorrelationHeatmapChart::from_matrix(&empty).is_err());
    }
}

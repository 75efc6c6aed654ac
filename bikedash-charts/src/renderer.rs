//! Chart renderer trait shared by all chart kinds

use crate::{color, ChartConfig};
use bikedash_common::Result;
use plotters::style::RGBColor;
use std::path::Path;

/// Trait for chart descriptions that can render themselves to a file
pub trait ChartRenderer {
    /// Stable identifier for the chart kind, used for output file names
    fn name(&self) -> &'static str;

    /// Whether the prepared table behind this chart had any rows
    fn is_empty(&self) -> bool;

    /// Render the chart to a PNG file
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()>;

    /// Background color from the style config
    fn background_color(&self, config: &ChartConfig) -> RGBColor {
        color::parse_color(&config.style.background_color)
    }
}

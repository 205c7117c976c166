use serde::{Deserialize, Serialize};

pub const SERIES_LABEL: &str = "Predicted price";
pub const SERIES_BORDER_COLOR: &str = "orange";
pub const SERIES_FILL_COLOR: &str = "rgba(255,165,0,0.2)";

/// Value Object - one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
}

/// Value Object - category-axis line chart input.
///
/// Shaped like the `{ labels, datasets }` structure browser chart libraries
/// consume, so it can be handed to JavaScript unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl LineChartData {
    pub fn point_count(&self) -> usize {
        self.labels.len()
    }
}

/// Value Object - drawing area and margins in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub axis_space: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { width: 700.0, height: 350.0, padding: 30.0, axis_space: 70.0 }
    }
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    /// Left edge of the plot area; the value axis sits to its left.
    pub fn plot_left(&self) -> f64 {
        self.padding + self.axis_space
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.plot_left() - self.padding).max(0.0)
    }

    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    /// Bottom margin leaves room for category labels.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.padding * 2.0 - 20.0).max(0.0)
    }

    pub fn plot_bottom(&self) -> f64 {
        self.plot_top() + self.plot_height()
    }
}

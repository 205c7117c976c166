use super::value_objects::{
    ChartDataset, ChartLayout, LineChartData, SERIES_BORDER_COLOR, SERIES_FILL_COLOR, SERIES_LABEL,
};
use crate::domain::prediction::Prediction;

/// Pixel position of one data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Value range mapped onto the plot height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Range over every dataset, widened by 5% each side. A flat series
    /// gets a ±1 band so it draws in the middle instead of dividing by zero.
    ///
    /// Widths are computed in halves so extremes near `f64::MAX` stay finite.
    pub fn from_data(data: &LineChartData) -> Option<Self> {
        let (lo, hi) = data
            .datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if lo > hi {
            return None;
        }
        let half_span = hi / 2.0 - lo / 2.0;
        if half_span == 0.0 {
            return Some(Self { min: lo - 1.0, max: hi + 1.0 });
        }
        let margin = half_span * 0.1;
        Some(Self {
            min: (lo - margin).max(f64::MIN),
            max: (hi + margin).min(f64::MAX),
        })
    }

    fn half_span(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    pub fn y_for(&self, value: f64, layout: &ChartLayout) -> f64 {
        let offset = self.max / 2.0 - value / 2.0;
        layout.plot_top() + offset / self.half_span() * layout.plot_height()
    }

    /// `count` evenly spaced values from max down to min.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.max],
            _ => {
                let half_step = self.half_span() / (count - 1) as f64;
                (0..count)
                    .map(|i| self.max - half_step * i as f64 - half_step * i as f64)
                    .collect()
            }
        }
    }
}

/// Chart construction from domain data.
pub struct ChartService;

impl ChartService {
    /// Dates become the category axis, predicted values the single series.
    pub fn line_chart(prediction: &Prediction) -> LineChartData {
        LineChartData {
            labels: prediction.dates().to_vec(),
            datasets: vec![ChartDataset {
                label: SERIES_LABEL.to_string(),
                data: prediction.predicted().to_vec(),
                border_color: SERIES_BORDER_COLOR.to_string(),
                background_color: SERIES_FILL_COLOR.to_string(),
            }],
        }
    }

    /// X position of category `index`. Categories are centred in equal slots.
    pub fn x_for(index: usize, count: usize, layout: &ChartLayout) -> f64 {
        let slot = layout.plot_width() / count.max(1) as f64;
        layout.plot_left() + slot * index as f64 + slot / 2.0
    }

    /// Pixel positions for every value of `dataset`.
    pub fn plot_points(dataset: &ChartDataset, scale: &ValueScale, layout: &ChartLayout) -> Vec<PlotPoint> {
        let count = dataset.data.len();
        dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| PlotPoint {
                x: Self::x_for(i, count, layout),
                y: scale.y_for(value, layout),
            })
            .collect()
    }
}

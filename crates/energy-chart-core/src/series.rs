// File: crates/energy-chart-core/src/series.rs
// Summary: Plot series model: labelled, colored (time, value) points.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    /// `(milliseconds since epoch, value)` pairs in drawing order.
    pub data: Vec<(f64, f64)>,
    pub color: Color,
    pub line_width: f32,
    pub show_points: bool,
}

impl PlotSeries {
    pub fn new(label: impl Into<String>, data: Vec<(f64, f64)>, color: Color) -> Self {
        Self { label: label.into(), data, color, line_width: 5.0, show_points: true }
    }

    /// Shift every value by `dy`; used to keep coincident points of two
    /// series distinguishable.
    pub fn offset_values(mut self, dy: f64) -> Self {
        for point in &mut self.data {
            point.1 += dy;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

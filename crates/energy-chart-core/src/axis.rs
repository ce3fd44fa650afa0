// File: crates/energy-chart-core/src/axis.rs
// Summary: Axis options for the line graph plot: time X axis and ticked value Y axis.

use std::fmt;

use chrono::DateTime;

use crate::grid::linspace;
use crate::primitives::format_value;

/// Formats a Y tick value into its label.
pub type TickFormatter = Box<dyn Fn(f64) -> String>;

/// Upper bound on the ticks a time axis produces.
pub const MAX_TIME_TICKS: usize = 1_000;

/// Horizontal axis in time mode: bounds in epoch milliseconds and a
/// `strftime` pattern for tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxis {
    pub min: f64,
    pub max: f64,
    pub time_format: String,
    pub tick_count: usize,
}

impl TimeAxis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, time_format: "%d %b".to_owned(), tick_count: 6 }
    }

    /// Tick positions snapped to whole UTC days inside `[min, max]`; falls
    /// back to evenly spaced ticks for spans shorter than two days. Never
    /// more than [`MAX_TIME_TICKS`]; empty for non-finite bounds.
    pub fn ticks(&self) -> Vec<f64> {
        const DAY: f64 = 86_400_000.0;
        if !self.min.is_finite() || !self.max.is_finite() || self.max < self.min {
            return Vec::new();
        }
        let span = self.max - self.min;
        if span < 2.0 * DAY {
            return linspace(self.min, self.max, self.tick_count.clamp(2, MAX_TIME_TICKS));
        }
        let step_days = (span / DAY / self.tick_count.max(1) as f64).ceil().max(1.0);
        let step = step_days * DAY;
        let first = (self.min / DAY).ceil() * DAY;
        if first > self.max {
            return Vec::new();
        }
        let count = (((self.max - first) / step).floor() as usize).saturating_add(1).min(MAX_TIME_TICKS);
        (0..count).map(|i| first + step * i as f64).filter(|t| *t <= self.max).collect()
    }

    pub fn format_tick(&self, millis: f64) -> String {
        match DateTime::from_timestamp_millis(millis as i64) {
            Some(dt) => dt.format(&self.time_format).to_string(),
            None => format_value(millis),
        }
    }
}

/// Vertical value axis with an explicit tick list.
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
    pub formatter: TickFormatter,
}

impl ValueAxis {
    /// Axis spanning the first to the last tick.
    pub fn from_ticks(ticks: Vec<f64>, formatter: TickFormatter) -> Self {
        let min = ticks.first().copied().unwrap_or(0.0);
        let max = ticks.last().copied().unwrap_or(1.0);
        Self { min, max, ticks, formatter }
    }

    pub fn label(&self, tick: f64) -> String {
        (self.formatter)(tick)
    }
}

impl fmt::Debug for ValueAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueAxis")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

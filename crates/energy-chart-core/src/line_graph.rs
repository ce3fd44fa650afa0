// File: crates/energy-chart-core/src/line_graph.rs
// Summary: Progress graph of a user's values against the group mean, with label-aware
//          Y ticks, hover tooltips, legend placement and an empty-data message.

use chrono::{DateTime, Datelike};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::axis::{TickFormatter, TimeAxis, ValueAxis};
use crate::config::ReferenceLine;
use crate::error::{ChartError, ChartResult};
use crate::grid::default_percent_ticks;
use crate::placeholder::{NodeId, Overlay, Placeholder};
use crate::plot::{HoverItem, Plot, PlotOptions};
use crate::primitives::format_value;
use crate::series::PlotSeries;
use crate::text::TextStyle;
use crate::theme::Theme;

/// Label of the group mean series.
pub const GROUP_LABEL: &str = "Everyone";
/// The mean series is drawn this much lower so coincident points stay visible.
pub const MEAN_OFFSET: f64 = -0.1;
/// Style class of the empty-data message.
pub const MESSAGE_CLASS: &str = "canvas-message";
/// Style class of hover tooltips.
pub const TOOLTIP_CLASS: &str = "tooltip";

const MONTHS: [&str; 12] = ["Jan", "Feb", "March", "April", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendSide {
    Left,
    #[default]
    Right,
}

/// Everything needed to draw one progress graph.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineGraphRequest {
    /// Legend label of the user's series.
    pub user_label: String,
    /// `[millis, value]` points of the user.
    pub data: Vec<(f64, f64)>,
    #[serde(default)]
    pub mean_data: Option<Vec<(f64, f64)>>,
    pub start_date: f64,
    pub end_date: f64,
    #[serde(default)]
    pub no_data_message: String,
    /// Y ticks; `0, 10, …, 100` when absent.
    #[serde(default)]
    pub value_ticks: Option<Vec<f64>>,
    /// Tick labels, index-aligned with the ticks.
    #[serde(default)]
    pub value_labels: Option<Vec<String>>,
    /// Tooltip labels; default to the tick labels.
    #[serde(default)]
    pub hover_labels: Option<Vec<String>>,
    #[serde(default)]
    pub legend: Option<LegendSide>,
    /// Lines drawn beneath the data, e.g. the user's baseline and the group norm.
    #[serde(default)]
    pub reference_lines: Vec<ReferenceLine>,
}

impl LineGraphRequest {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn ticks(&self) -> Vec<f64> {
        self.value_ticks.clone().unwrap_or_else(default_percent_ticks)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let ticks = self.ticks();
        if ticks.len() < 2 {
            return Err(ChartError::config("valueTicks needs at least two ticks"));
        }
        if ticks.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(ChartError::config("valueTicks must be strictly increasing"));
        }
        for (name, millis) in [("startDate", self.start_date), ("endDate", self.end_date)] {
            if !millis.is_finite() || DateTime::from_timestamp_millis(millis as i64).is_none() {
                return Err(ChartError::config(format!("{name} is not a representable timestamp, got {millis}")));
            }
        }
        if !(self.end_date >= self.start_date) {
            return Err(ChartError::config("endDate is before startDate"));
        }
        Ok(())
    }
}

/// Maps Y values back to the labels shown for them.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverLabels {
    ticks: Vec<f64>,
    value_labels: Option<Vec<String>>,
    hover_labels: Option<Vec<String>>,
}

impl HoverLabels {
    pub fn new(ticks: Vec<f64>, value_labels: Option<Vec<String>>, hover_labels: Option<Vec<String>>) -> Self {
        Self { ticks, value_labels, hover_labels }
    }

    fn tooltip_labels(&self) -> Option<&[String]> {
        self.hover_labels.as_deref().or(self.value_labels.as_deref())
    }

    /// Whether fallback numbers get a `%` suffix: when the labels are
    /// percentages, or when there are none and the axis prints percentages.
    pub fn is_percentage(&self) -> bool {
        self.tooltip_labels()
            .and_then(|l| l.first())
            .map_or(true, |first| first.contains('%'))
    }

    /// Axis label of a tick.
    pub fn tick_label(&self, tick: f64) -> String {
        match &self.value_labels {
            Some(labels) => self
                .index_of(tick)
                .and_then(|i| labels.get(i))
                .cloned()
                .unwrap_or_else(|| format_value(tick)),
            None => format!("{}%", format_value(tick)),
        }
    }

    /// Tooltip label of a hovered value: the label of an exactly matching
    /// tick, otherwise the value itself.
    pub fn label_for(&self, y: f64) -> String {
        let y = (y * 100.0).round() / 100.0;
        if let Some(label) = self.index_of(y).and_then(|i| self.tooltip_labels()?.get(i)) {
            return label.clone();
        }
        let mut label = format_value(y);
        if self.is_percentage() {
            label.push('%');
        }
        label
    }

    pub fn formatter(&self) -> TickFormatter {
        let labels = self.clone();
        Box::new(move |tick| labels.tick_label(tick))
    }

    fn index_of(&self, value: f64) -> Option<usize> {
        self.ticks.iter().position(|t| *t == value)
    }
}

/// `"{Month} {day}: {label}"` for a point at `millis` (UTC).
pub fn tooltip_text(millis: f64, label: &str) -> String {
    match DateTime::from_timestamp_millis(millis as i64) {
        Some(dt) => format!("{} {}: {}", MONTHS[dt.month0() as usize], dt.day(), label),
        None => label.to_owned(),
    }
}

/// Where the legend table sits relative to the surface edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendPlacement {
    pub side: LegendSide,
    /// Distance from the surface bottom.
    pub bottom: f32,
    /// Distance from the surface edge on `side`.
    pub inset: f32,
}

/// Result of a hover event.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverOutcome {
    /// A tooltip with this text is now shown.
    Shown(String),
    /// Still over the previously hovered point.
    Unchanged,
    /// Not over any point; no tooltip is shown.
    Hidden,
}

/// A drawn progress graph that reacts to hover events.
pub struct LineGraph<'p> {
    plot: Plot<'p>,
    labels: HoverLabels,
    legend: Option<LegendPlacement>,
    message: Option<NodeId>,
    previous: Option<(usize, usize)>,
    tooltip: Option<NodeId>,
}

/// Draw the progress graph described by `request` into `placeholder`.
pub fn populate_graph<'p>(
    placeholder: &'p mut dyn Placeholder,
    request: &LineGraphRequest,
    theme: Theme,
) -> ChartResult<LineGraph<'p>> {
    request.validate()?;
    let ticks = request.ticks();
    let labels = HoverLabels::new(ticks.clone(), request.value_labels.clone(), request.hover_labels.clone());

    let user = PlotSeries::new(request.user_label.clone(), request.data.clone(), theme.user_series);
    let mut series = Vec::with_capacity(2);
    if let Some(mean) = &request.mean_data {
        series.push(PlotSeries::new(GROUP_LABEL, mean.clone(), theme.group_series).offset_values(MEAN_OFFSET));
    }
    series.push(user);
    debug!(points = request.data.len(), series = series.len(), "populate graph");

    let mut options = PlotOptions::new(
        TimeAxis::new(request.start_date, request.end_date),
        ValueAxis::from_ticks(ticks, labels.formatter()),
    );
    options.theme = theme;
    options.reference_lines = request.reference_lines.clone();

    let mut plot = Plot::new(placeholder, series, options)?;

    let message = if request.data.is_empty() {
        Some(display_message(&mut plot, &request.no_data_message, theme))
    } else {
        None
    };
    let legend = request.legend.map(|side| legend_placement(&plot, side));

    Ok(LineGraph { plot, labels, legend, message, previous: None, tooltip: None })
}

/// Center `msg` over the surface.
fn display_message(plot: &mut Plot<'_>, msg: &str, theme: Theme) -> NodeId {
    let style = TextStyle::class(MESSAGE_CLASS).with_color(theme.message);
    let surface = plot.surface_mut();
    let size = surface.measure_text(msg, &style);
    let x = (surface.width_f() - size.width) / 2.0;
    let y = (surface.height_f() - size.height) / 2.0;
    surface.overlay_text(msg, &style, x, y)
}

fn legend_placement(plot: &Plot<'_>, side: LegendSide) -> LegendPlacement {
    let offset = plot.plot_offset();
    let inset = match side {
        LegendSide::Left => offset.left + 11.0,
        LegendSide::Right => offset.right + 11.0,
    };
    LegendPlacement { side, bottom: offset.bottom + 7.0, inset }
}

impl<'p> LineGraph<'p> {
    pub fn plot(&self) -> &Plot<'p> { &self.plot }
    pub fn labels(&self) -> &HoverLabels { &self.labels }
    pub fn legend(&self) -> Option<LegendPlacement> { self.legend }
    /// Overlay node of the empty-data message, when one is shown.
    pub fn message(&self) -> Option<NodeId> { self.message }
    pub fn tooltip(&self) -> Option<NodeId> { self.tooltip }

    /// Handle pointer movement at page coordinates.
    pub fn on_hover(&mut self, page_x: f32, page_y: f32) -> HoverOutcome {
        match self.plot.nearest_item(page_x, page_y) {
            Some(item) => self.show_tooltip(item),
            None => {
                self.hide_tooltip();
                self.previous = None;
                HoverOutcome::Hidden
            }
        }
    }

    fn show_tooltip(&mut self, item: HoverItem) -> HoverOutcome {
        let key = (item.series_index, item.data_index);
        if self.previous == Some(key) {
            return HoverOutcome::Unchanged;
        }
        self.previous = Some(key);
        self.hide_tooltip();

        let (millis, value) = item.datapoint;
        let text = tooltip_text(millis, &self.labels.label_for(value));
        trace!(series = item.series_index, index = item.data_index, %text, "tooltip");

        let theme = self.plot.options().theme;
        let style = TextStyle::class(TOOLTIP_CLASS).with_background(theme.tooltip_background);
        let overlay = Overlay::new(text.clone(), style, item.page_x + 5.0, item.page_y - 15.0);
        self.tooltip = Some(self.plot.surface_mut().insert_page_overlay(overlay));
        HoverOutcome::Shown(text)
    }

    fn hide_tooltip(&mut self) {
        if let Some(id) = self.tooltip.take() {
            self.plot.surface_mut().remove_overlay(id);
        }
    }
}

// File: crates/energy-chart-core/src/plot.rs
// Summary: Minimal time-series plot: axes with overlay tick labels, series lines and
//          point markers, reference lines beneath the data, and nearest-point hover search.

use tracing::{debug, trace};

use crate::axis::{TimeAxis, ValueAxis};
use crate::config::{LineStyle, ReferenceLine};
use crate::error::{ChartError, ChartResult};
use crate::placeholder::Placeholder;
use crate::primitives::dash_spans;
use crate::scale::{TimeScale, ValueScale};
use crate::series::PlotSeries;
use crate::surface::{create_draw_surface, measure_in, DrawSurface};
use crate::text::TextStyle;
use crate::theme::Theme;
use crate::types::{PlotOffset, BASE_FONT_PX, GRIDLINE_LABEL_SCALE};

/// Style class of axis tick labels.
pub const TICK_CLASS: &str = "tick-label";

/// Gap between tick labels and the plot area.
const LABEL_GAP: f32 = 5.0;
/// Radius of series point markers.
const POINT_RADIUS: f32 = 3.0;
/// Width of reference lines drawn under the data.
const REFERENCE_LINE_WIDTH: f32 = 2.0;

pub struct PlotOptions {
    pub x_axis: TimeAxis,
    pub y_axis: ValueAxis,
    pub theme: Theme,
    pub border_width: f32,
    /// Horizontal lines drawn beneath the series.
    pub reference_lines: Vec<ReferenceLine>,
    pub hoverable: bool,
    /// Hover search radius in pixels.
    pub hover_radius: f32,
}

impl PlotOptions {
    pub fn new(x_axis: TimeAxis, y_axis: ValueAxis) -> Self {
        Self {
            x_axis,
            y_axis,
            theme: Theme::campaign(),
            border_width: 1.0,
            reference_lines: Vec::new(),
            hoverable: true,
            hover_radius: 10.0,
        }
    }
}

/// The data point closest to a hover position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverItem {
    pub series_index: usize,
    pub data_index: usize,
    pub datapoint: (f64, f64),
    /// Page position of the data point.
    pub page_x: f32,
    pub page_y: f32,
}

/// A rendered plot. Owns its drawing surface so overlays (tooltips,
/// messages) can be added after the initial draw.
pub struct Plot<'p> {
    surface: DrawSurface<'p>,
    series: Vec<PlotSeries>,
    options: PlotOptions,
    offset: PlotOffset,
    x: TimeScale,
    y: ValueScale,
}

impl<'p> Plot<'p> {
    /// Create a surface in `placeholder` and draw the series onto it.
    pub fn new(placeholder: &'p mut dyn Placeholder, series: Vec<PlotSeries>, options: PlotOptions) -> ChartResult<Self> {
        let y_axis = &options.y_axis;
        if !(y_axis.max > y_axis.min) {
            return Err(ChartError::config(format!(
                "y axis needs max > min, got [{}, {}]",
                y_axis.min, y_axis.max
            )));
        }
        if !options.x_axis.min.is_finite() || !options.x_axis.max.is_finite() {
            return Err(ChartError::config("x axis bounds must be finite"));
        }
        if options.x_axis.max < options.x_axis.min {
            return Err(ChartError::config("x axis max is before its min"));
        }

        // layout is checked before the placeholder is cleared
        let (width, height) = placeholder.size();
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        let tick_style = TextStyle::class(TICK_CLASS)
            .with_color(options.theme.tick_label)
            .with_font_size(BASE_FONT_PX * GRIDLINE_LABEL_SCALE);

        let y_labels: Vec<(f64, String)> = y_axis.ticks.iter().map(|&t| (t, y_axis.label(t))).collect();
        let label_width = y_labels
            .iter()
            .map(|(_, l)| measure_in(&mut *placeholder, l, &tick_style).width)
            .fold(0.0f32, f32::max);
        let label_height = measure_in(&mut *placeholder, "0", &tick_style).height;

        let offset = PlotOffset::new(
            label_width + 2.0 * LABEL_GAP,
            2.0 * LABEL_GAP,
            label_height / 2.0 + LABEL_GAP,
            label_height + 2.0 * LABEL_GAP,
        );
        let plot_w = width as f32 - offset.hsum();
        let plot_h = height as f32 - offset.vsum();
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(ChartError::InvalidDimensions { width: plot_w as i32, height: plot_h as i32 });
        }
        let surface = create_draw_surface(placeholder)?;

        let x = TimeScale::new(options.x_axis.min, options.x_axis.max, plot_w);
        let y = ValueScale::new(y_axis.min, y_axis.max, plot_h);
        debug!(series = series.len(), plot_w, plot_h, "plot layout");

        let mut plot = Self { surface, series, options, offset, x, y };
        plot.draw_grid(&y_labels, &tick_style);
        plot.draw_reference_lines();
        plot.draw_series();
        plot.draw_border();
        Ok(plot)
    }

    pub fn surface(&self) -> &DrawSurface<'p> { &self.surface }
    pub fn surface_mut(&mut self) -> &mut DrawSurface<'p> { &mut self.surface }
    pub fn series(&self) -> &[PlotSeries] { &self.series }
    pub fn options(&self) -> &PlotOptions { &self.options }
    pub fn plot_offset(&self) -> PlotOffset { self.offset }
    pub fn plot_width(&self) -> f32 { self.x.width_px }
    pub fn plot_height(&self) -> f32 { self.y.height_px }

    /// X value to pixel, relative to the plot area.
    pub fn p2c_x(&self, t: f64) -> f32 { self.x.to_px(t) }
    /// Y value to pixel, relative to the plot area.
    pub fn p2c_y(&self, v: f64) -> f32 { self.y.to_px(v) }
    pub fn c2p_x(&self, px: f32) -> f64 { self.x.from_px(px) }
    pub fn c2p_y(&self, py: f32) -> f64 { self.y.from_px(py) }

    /// Nearest data point within the hover radius of a page position.
    pub fn nearest_item(&self, page_x: f32, page_y: f32) -> Option<HoverItem> {
        if !self.options.hoverable {
            return None;
        }
        let c = self.surface.page_to_canvas(page_x, page_y);
        let (mx, my) = (c.x - self.offset.left, c.y - self.offset.top);
        let max_dist = self.options.hover_radius * self.options.hover_radius;

        let mut best: Option<(f32, usize, usize)> = None;
        for (si, s) in self.series.iter().enumerate() {
            for (di, &(t, v)) in s.data.iter().enumerate() {
                let dx = self.p2c_x(t) - mx;
                let dy = self.p2c_y(v) - my;
                let dist = dx * dx + dy * dy;
                if dist < max_dist && best.map_or(true, |(d, _, _)| dist < d) {
                    best = Some((dist, si, di));
                }
            }
        }

        let (_, si, di) = best?;
        let (t, v) = self.series[si].data[di];
        let page = self
            .surface
            .canvas_to_page(self.offset.left + self.p2c_x(t), self.offset.top + self.p2c_y(v));
        Some(HoverItem { series_index: si, data_index: di, datapoint: (t, v), page_x: page.x, page_y: page.y })
    }

    fn draw_grid(&mut self, y_labels: &[(f64, String)], tick_style: &TextStyle) {
        let (left, top) = (self.offset.left, self.offset.top);
        let (w, h) = (self.plot_width(), self.plot_height());
        let theme = self.options.theme;

        let mut s = self.surface.save();
        s.set_fill_color(theme.background);
        s.fill_rect(left, top, w, h);

        s.set_stroke_color(theme.grid);
        s.begin_path();
        for (tick, _) in y_labels {
            let y = top + self.y.to_px(*tick);
            s.move_to(left, y);
            s.line_to(left + w, y);
        }
        s.stroke();

        for (tick, label) in y_labels {
            let size = s.measure_text(label, tick_style);
            let y = top + self.y.to_px(*tick) - size.height / 2.0;
            s.overlay_text(label, tick_style, left - LABEL_GAP - size.width, y);
        }

        for t in self.options.x_axis.ticks() {
            let label = self.options.x_axis.format_tick(t);
            let size = s.measure_text(&label, tick_style);
            let x = left + self.x.to_px(t) - size.width / 2.0;
            s.overlay_text(&label, tick_style, x, top + h + LABEL_GAP);
        }
    }

    fn draw_reference_lines(&mut self) {
        let (left, top, w) = (self.offset.left, self.offset.top, self.plot_width());
        for line in &self.options.reference_lines {
            if line.value == 0.0 {
                // would sit on the bottom edge of the plot
                continue;
            }
            let y = top + self.y.to_px(line.value);
            trace!(value = line.value, y, "plot reference line");

            let mut s = self.surface.save();
            s.set_line_width(REFERENCE_LINE_WIDTH);
            s.set_stroke_color(line.color.color());
            s.begin_path();
            match line.line_style {
                LineStyle::Solid => {
                    s.move_to(left, y);
                    s.line_to(left + w, y);
                }
                LineStyle::Dashed => {
                    for (x0, x1) in dash_spans(w) {
                        s.move_to(left + x0, y);
                        s.line_to(left + x1, y);
                    }
                }
            }
            s.stroke();
        }
    }

    fn draw_series(&mut self) {
        let (left, top) = (self.offset.left, self.offset.top);
        let point_fill = self.options.theme.point_fill;
        for series in &self.series {
            if series.is_empty() {
                continue;
            }
            let pts: Vec<(f32, f32)> = series
                .data
                .iter()
                .map(|&(t, v)| (left + self.x.to_px(t), top + self.y.to_px(v)))
                .collect();

            let mut s = self.surface.save();
            s.set_stroke_color(series.color);
            s.set_line_width(series.line_width);
            if pts.len() > 1 {
                s.begin_path();
                s.move_to(pts[0].0, pts[0].1);
                for &(x, y) in &pts[1..] {
                    s.line_to(x, y);
                }
                s.stroke();
            }
            if series.show_points {
                s.set_line_width(2.0);
                for &(x, y) in &pts {
                    s.point_marker(x, y, POINT_RADIUS, point_fill);
                }
            }
        }
    }

    fn draw_border(&mut self) {
        if self.options.border_width <= 0.0 {
            return;
        }
        let (left, top, w, h) = (self.offset.left, self.offset.top, self.plot_width(), self.plot_height());
        let mut s = self.surface.save();
        s.set_line_width(self.options.border_width);
        s.set_stroke_color(self.options.theme.border);
        s.stroke_rect(left, top, w, h);
    }
}

// File: crates/energy-chart-core/src/bar_chart.rs
// Summary: Two-bar comparison chart: layout, bars, arrows, legends and reference lines.

use tracing::debug;

use crate::color::Color;
use crate::config::{ArrowStyle, ChartConfig, SeriesStyle};
use crate::background::draw_background;
use crate::error::ChartResult;
use crate::geometry::RectF;
use crate::placeholder::Placeholder;
use crate::primitives::{draw_arrow, draw_reference_line, ArrowGeometry, ArrowSpec};
use crate::surface::{create_draw_surface, DrawSurface};
use crate::text::TextStyle;
use crate::types::{ARROW_HEIGHT, ARROW_MIN_PADDING};

/// Style class of bar legends.
pub const LEGEND_CLASS: &str = "bar-legend";

/// Horizontal placement shared by both bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub quarter: f32,
    pub bar_width: f32,
    pub one_center: f32,
    pub two_center: f32,
}

impl BarLayout {
    /// Split the width right of `padding_left` into quarters; bar one is
    /// centered near the first quarter, bar two near the third.
    pub fn compute(surface_width: f32, config: &ChartConfig) -> Self {
        let usable = surface_width - config.padding_left;
        let padding = config.padding;
        let quarter = usable / 4.0;
        Self {
            quarter,
            bar_width: usable / 2.0 - (padding + padding / 2.0),
            one_center: quarter + padding / 2.0 + config.padding_left,
            two_center: quarter * 3.0 - padding / 2.0 + config.padding_left,
        }
    }
}

/// Pixel height of a bar: proportional to `value / max_value`. Values above
/// the maximum are not clamped.
#[inline]
pub fn bar_height(surface_height: f32, value: f64, max_value: f64) -> f32 {
    (surface_height as f64 * (value / max_value)) as f32
}

/// What was drawn for one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub center_x: f32,
    pub rect: RectF,
    pub arrow: Option<ArrowGeometry>,
}

/// Geometry of both bars, left then right.
#[derive(Clone, Debug, PartialEq)]
pub struct BarPair {
    pub layout: BarLayout,
    pub one: BarGeometry,
    pub two: BarGeometry,
}

struct BarInput<'a> {
    value: f64,
    center_x: f32,
    width: f32,
    style: &'a SeriesStyle,
    arrow: Option<&'a ArrowStyle>,
}

/// Render the comparison chart onto an existing surface.
///
/// Draw order: background, baseline, bar one, bar two, target (on top).
pub fn render_bar_chart(surface: &mut DrawSurface<'_>, left: f64, right: f64, config: &ChartConfig) -> BarPair {
    let layout = BarLayout::compute(surface.width_f(), config);
    debug!(left, right, max = config.max_value, ?layout, "render bar chart");

    draw_background(surface, config);
    draw_reference_line(surface, config.baseline.as_ref(), config.max_value);

    let one = draw_bar(
        surface,
        config,
        BarInput {
            value: left,
            center_x: layout.one_center,
            width: layout.bar_width,
            style: &config.series_one,
            arrow: config.one_arrow.as_ref(),
        },
    );
    let two = draw_bar(
        surface,
        config,
        BarInput {
            value: right,
            center_x: layout.two_center,
            width: layout.bar_width,
            style: &config.series_two,
            arrow: config.two_arrow.as_ref(),
        },
    );

    draw_reference_line(surface, config.target.as_ref(), config.max_value);
    BarPair { layout, one, two }
}

fn draw_bar(surface: &mut DrawSurface<'_>, config: &ChartConfig, bar: BarInput<'_>) -> BarGeometry {
    let surface_height = surface.height_f();
    let height = bar_height(surface_height, bar.value, config.max_value);
    let rect = RectF::from_xywh(bar.center_x - bar.width / 2.0, surface_height - height, bar.width, height);

    let mut s = surface.save();
    if config.outline {
        s.set_stroke_color(Color::BLACK);
        s.stroke_rect(rect.left, rect.top, rect.width(), rect.height());
    }
    s.set_fill_color(bar.style.color.color());
    s.fill_rect(rect.left, rect.top, rect.width(), rect.height());

    let arrow = bar.arrow.map(|style| {
        let mut base_y = rect.top + ARROW_HEIGHT + bar.width * 0.2;
        if base_y > surface_height {
            // short bar: shrink the padding before resorting to scaling
            base_y = rect.top + ARROW_HEIGHT + ARROW_MIN_PADDING;
        }
        draw_arrow(
            &mut s,
            &ArrowSpec {
                center_x: bar.center_x,
                base_y,
                width: bar.width / 2.0,
                height: ARROW_HEIGHT,
                direction: style.direction,
                outline: style.outline,
                opacity: style.opacity,
            },
        )
    });

    if let Some(legend) = bar.style.legend.as_deref().filter(|l| !l.is_empty()) {
        let mut style = TextStyle::class(LEGEND_CLASS);
        if let Some(color) = &bar.style.legend_color {
            style = style.with_color(color.color());
        }
        let size = s.measure_text(legend, &style);
        s.overlay_text(legend, &style, bar.center_x - size.width / 2.0, surface_height - size.height);
    }

    BarGeometry { center_x: bar.center_x, rect, arrow }
}

/// Entry point mirroring the page-level chart call: validates the
/// configuration, creates a fresh surface in `placeholder` and renders.
pub struct BarChart;

impl BarChart {
    pub fn render<'p>(
        placeholder: &'p mut dyn Placeholder,
        left: f64,
        right: f64,
        config: &ChartConfig,
    ) -> ChartResult<(DrawSurface<'p>, BarPair)> {
        config.validate()?;
        let mut surface = create_draw_surface(placeholder)?;
        let bars = render_bar_chart(&mut surface, left, right, config);
        Ok((surface, bars))
    }
}

// File: crates/energy-chart-core/src/primitives.rs
// Summary: Reference lines, golden-ratio arrows and value-to-pixel helpers.

use std::f32::consts::PI;

use tracing::trace;

use crate::color::black_with_opacity;
use crate::config::{ArrowDirection, LineStyle, ReferenceLine};
use crate::geometry::{Point, RectF};
use crate::surface::{DrawCommand, DrawSurface};
use crate::text::TextStyle;
use crate::types::{
    ARROW_SCALE_DOWN, BASE_FONT_PX, DASH_SPACING, DASH_WIDTH, GOLDEN_RATIO, GRIDLINE_LABEL_RISE,
    GRIDLINE_LABEL_SCALE, GRIDLINE_LABEL_X,
};

/// Style class of the labels attached to reference lines and gridlines.
pub const LINE_LABEL_CLASS: &str = "line-label";

/// Pixel row of `value` on a surface of `height` where `max_value` maps to row 0.
#[inline]
pub fn value_to_y(height: f32, value: f64, max_value: f64) -> f32 {
    (height as f64 * ((max_value - value) / max_value)) as f32
}

/// Start/end x of every dash on a line of `width`. A dash that would reach
/// the right edge is dropped.
pub fn dash_spans(width: f32) -> Vec<(f32, f32)> {
    let mut spans = Vec::new();
    let mut x = 0.0f32;
    while x + DASH_WIDTH < width {
        spans.push((x, x + DASH_WIDTH));
        x += DASH_SPACING;
    }
    spans
}

/// Format a value the way labels print it: `10`, `2.5`, `0.25`.
pub fn format_value(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Draw a horizontal line across the whole surface at `line.value`.
///
/// Absent lines and lines at value 0 (which would sit on the X axis) draw
/// nothing. The stroke state is restored afterwards.
pub fn draw_reference_line(surface: &mut DrawSurface<'_>, line: Option<&ReferenceLine>, max_value: f64) {
    let Some(line) = line else { return };
    if line.value == 0.0 {
        trace!("reference line at zero suppressed");
        return;
    }

    let width = surface.width_f();
    let y = value_to_y(surface.height_f(), line.value, max_value);
    trace!(value = line.value, y, style = ?line.line_style, "reference line");

    let mut s = surface.save();
    s.set_stroke_color(line.color.color());
    s.begin_path();
    match line.line_style {
        LineStyle::Solid => {
            s.move_to(0.0, y);
            s.line_to(width, y);
        }
        LineStyle::Dashed => {
            for (x0, x1) in dash_spans(width) {
                s.move_to(x0, y);
                s.line_to(x1, y);
            }
        }
    }
    s.stroke();

    if let Some(label) = line.label.as_deref().filter(|l| !l.is_empty()) {
        let mut style = TextStyle::class(LINE_LABEL_CLASS).with_font_size(BASE_FONT_PX * GRIDLINE_LABEL_SCALE);
        if let Some(color) = &line.label_color {
            style = style.with_color(color.color());
        }
        s.overlay_text(label, &style, GRIDLINE_LABEL_X, y - GRIDLINE_LABEL_RISE);
    }
}

/// Device-space outline of a drawn arrow.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowGeometry {
    pub points: [Point; 7],
    pub scaled: bool,
}

impl ArrowGeometry {
    pub fn bounds(&self) -> RectF {
        RectF::bounding(&self.points).unwrap_or_default()
    }

    /// The apex of the arrow head.
    pub fn tip(&self) -> Point {
        self.points[3]
    }
}

/// Arrow parameters in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowSpec {
    pub center_x: f32,
    /// Bottom of the arrow's box; the tip of an upward arrow sits `height` above.
    pub base_y: f32,
    pub width: f32,
    pub height: f32,
    pub direction: ArrowDirection,
    pub outline: bool,
    pub opacity: f32,
}

/// Draw a seven-point arrow (shaft plus triangular head) split by the golden
/// ratio. An arrow whose base falls below the surface is drawn at half size,
/// horizontally centered, with the top edge of its box kept in place.
/// Downward arrows occupy the same box as upward ones.
pub fn draw_arrow(surface: &mut DrawSurface<'_>, arrow: &ArrowSpec) -> ArrowGeometry {
    let ArrowSpec { center_x, base_y, width, height, direction, outline, opacity } = *arrow;

    let head_height = height / (1.0 + GOLDEN_RATIO);
    let shaft_height = head_height * GOLDEN_RATIO;
    let head_space = width / (1.0 + GOLDEN_RATIO);
    let shaft_width = head_space * GOLDEN_RATIO;
    let head_edge = head_space / 2.0;
    let base_x = center_x - shaft_width / 2.0;
    let scaled = base_y > surface.height_f();

    let mut s = surface.save();
    if scaled {
        let k = ARROW_SCALE_DOWN;
        // top edge stays at base_y - height
        s.translate(center_x - shaft_width * k / 2.0, base_y - height * (1.0 - k));
        s.scale(k, k);
    } else {
        s.translate(base_x, base_y);
    }

    if direction == ArrowDirection::Down {
        s.rotate(PI);
        s.translate(-shaft_width, height);
    }

    let local = [
        (0.0, 0.0),
        (0.0, -shaft_height),
        (-head_edge, -shaft_height),
        (shaft_width / 2.0, -shaft_height - head_height),
        (shaft_width + head_edge, -shaft_height),
        (shaft_width, -shaft_height),
        (shaft_width, 0.0),
    ];

    s.begin_path();
    s.move_to(local[0].0, local[0].1);
    for &(x, y) in &local[1..] {
        s.line_to(x, y);
    }
    s.close_path();

    if outline {
        s.stroke();
    }
    s.set_fill_color(black_with_opacity(opacity));
    s.fill();

    let mut points = [Point::default(); 7];
    if let Some(DrawCommand::FillPath { path, .. }) = s.commands().last() {
        for (slot, p) in points.iter_mut().zip(path.points()) {
            *slot = p;
        }
    }
    trace!(center_x, base_y, scaled, ?direction, "arrow");
    ArrowGeometry { points, scaled }
}

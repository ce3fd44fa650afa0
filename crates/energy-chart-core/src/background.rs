// File: crates/energy-chart-core/src/background.rs
// Summary: Background fill and labelled horizontal gridlines.

use tracing::trace;

use crate::config::{ChartConfig, LineStyle, ReferenceLine};
use crate::grid::gridline_values;
use crate::primitives::{draw_reference_line, format_value};
use crate::surface::{DrawSurface, Fill};

/// Fill the surface with the background color (or its vertical gradient) and
/// draw a gridline at every multiple of the line increment below the maximum.
pub fn draw_background(surface: &mut DrawSurface<'_>, config: &ChartConfig) {
    let bg = &config.background;
    let (width, height) = (surface.width_f(), surface.height_f());

    let mut s = surface.save();
    let fill = match &bg.gradient {
        Some(bottom) => Fill::VerticalGradient { top: bg.color.color(), bottom: bottom.color() },
        None => Fill::Solid(bg.color.color()),
    };
    s.set_fill(fill);
    s.fill_rect(0.0, 0.0, width, height);

    if !bg.lines {
        return;
    }
    let (Some(line_color), Some(increment)) = (&bg.line_color, bg.line_increment) else {
        return;
    };

    let values = gridline_values(increment, config.max_value);
    trace!(count = values.len(), increment, "gridlines");
    for (index, value) in values.into_iter().enumerate() {
        let label = bg
            .line_labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .filter(|l| !l.is_empty())
            .cloned()
            .unwrap_or_else(|| format_value(value));
        let line = ReferenceLine {
            value,
            color: line_color.clone(),
            line_style: LineStyle::Solid,
            label: Some(label),
            label_color: Some(bg.line_labels_color.clone()),
        };
        draw_reference_line(&mut s, Some(&line), config.max_value);
    }
}

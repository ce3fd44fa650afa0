// File: crates/energy-chart-core/src/theme.rs
// Summary: Campaign color presets for the line graph and tooltips.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub border: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub user_series: skia::Color,
    pub group_series: skia::Color,
    pub point_fill: skia::Color,
    pub tooltip_background: skia::Color,
    pub message: skia::Color,
}

impl Theme {
    /// Colors used across the campaign site.
    pub fn campaign() -> Self {
        Self {
            name: "campaign",
            background: skia::Color::from_argb(255, 255, 255, 255),
            border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            grid: skia::Color::from_argb(38, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 84, 84, 84),
            user_series: skia::Color::from_argb(255, 0xed, 0xbc, 0x28),
            group_series: skia::Color::from_argb(255, 0x60, 0xbe, 0xff),
            point_fill: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_background: skia::Color::from_argb(204, 0xff, 0xee, 0xee),
            message: skia::Color::from_argb(255, 96, 96, 96),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            border: skia::Color::from_argb(255, 60, 60, 66),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            tick_label: skia::Color::from_argb(255, 200, 200, 210),
            user_series: skia::Color::from_argb(255, 0xed, 0xbc, 0x28),
            group_series: skia::Color::from_argb(255, 0x60, 0xbe, 0xff),
            point_fill: skia::Color::from_argb(255, 18, 18, 20),
            tooltip_background: skia::Color::from_argb(220, 40, 40, 45),
            message: skia::Color::from_argb(255, 170, 170, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::campaign()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::campaign(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to the campaign colors.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::campaign)
}

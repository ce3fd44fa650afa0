// File: crates/energy-chart-core/src/types.rs
// Summary: Shared constants (proportions, dash pattern, font sizes) and plot offsets.

/// Default surface width in pixels for examples and benches.
pub const WIDTH: i32 = 400;
/// Default surface height in pixels for examples and benches.
pub const HEIGHT: i32 = 300;

/// Proportion used to split arrows into head and shaft.
pub const GOLDEN_RATIO: f32 = 1.618_034;

/// Length of one dash of a dashed reference line.
pub const DASH_WIDTH: f32 = 5.0;
/// Gap between two dashes.
pub const DASH_GAP: f32 = 5.0;
/// Distance from the start of one dash to the start of the next.
pub const DASH_SPACING: f32 = DASH_WIDTH + DASH_GAP;

/// Height of the direction arrow drawn inside a bar.
pub const ARROW_HEIGHT: f32 = 50.0;
/// Arrow padding used when the proportional padding pushes it off the surface.
pub const ARROW_MIN_PADDING: f32 = 5.0;
/// Uniform scale applied to arrows that would still overflow.
pub const ARROW_SCALE_DOWN: f32 = 0.5;

/// Base overlay font size in pixels.
pub const BASE_FONT_PX: f32 = 13.0;
/// Gridline labels are rendered at 85% of the base size.
pub const GRIDLINE_LABEL_SCALE: f32 = 0.85;
/// Gridline labels sit this far above their line.
pub const GRIDLINE_LABEL_RISE: f32 = 12.0;
/// Left inset of gridline labels.
pub const GRIDLINE_LABEL_X: f32 = 2.0;

/// Space between the plot area and the surface edges, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotOffset {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotOffset {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal offset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical offset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for PlotOffset {
    fn default() -> Self {
        Self::new(10.0, 10.0, 10.0, 10.0)
    }
}

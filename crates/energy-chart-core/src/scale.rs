// File: crates/energy-chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scale transforms for the line graph plot area.
// Pixel positions are relative to the plot area's top-left corner.

/// Milliseconds since the Unix epoch.
pub type Millis = f64;
/// Value Y coordinate.
pub type Value = f64;

/// Horizontal time scale mapping `[min, max]` onto `[0, width_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub min: Millis,
    pub max: Millis,
    pub width_px: f32,
}

impl TimeScale {
    pub fn new(min: Millis, max: Millis, width_px: f32) -> Self {
        let max = if (max - min).abs() < 1e-9 { min + 1.0 } else { max };
        Self { min, max, width_px }
    }
    #[inline]
    pub fn to_px(&self, t: Millis) -> f32 {
        (((t - self.min) / (self.max - self.min)) * self.width_px as f64) as f32
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Millis {
        self.min + (px as f64 / self.width_px.max(1.0) as f64) * (self.max - self.min)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[height_px, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub vmin: Value,
    pub vmax: Value,
    pub height_px: f32,
}

impl ValueScale {
    pub fn new(vmin: Value, vmax: Value, height_px: f32) -> Self {
        let vmax = if (vmax - vmin).abs() < 1e-12 { vmin + 1.0 } else { vmax };
        Self { vmin, vmax, height_px }
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.height_px - (((y - self.vmin) / span) * self.height_px as f64) as f32
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = self.vmax - self.vmin;
        self.vmin + ((self.height_px - py) / self.height_px.max(1.0)) as f64 * span
    }
}

// File: crates/energy-chart-core/src/config.rs
// Summary: Bar chart configuration, loaded from JSON and validated before drawing.
// Notes:
// - JSON keys are camelCase. `one`/`two` are accepted for the series styles,
//   matching the option names used by the campaign pages.

use std::path::Path;

use serde::Deserialize;

use crate::color::CssColor;
use crate::error::{ChartError, ChartResult};
use crate::grid::MAX_GRIDLINES;

fn default_padding() -> f32 { 30.0 }
fn default_outline() -> bool { true }
fn default_label_color() -> CssColor { CssColor::from(skia_safe::Color::BLACK) }

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Value drawn at the top edge of the surface. Must be positive.
    pub max_value: f64,
    /// Horizontal space around the bars.
    #[serde(default = "default_padding")]
    pub padding: f32,
    /// Space reserved on the left, e.g. for gridline labels.
    #[serde(default)]
    pub padding_left: f32,
    /// Stroke a black rectangle behind each bar.
    #[serde(default = "default_outline")]
    pub outline: bool,
    #[serde(alias = "one")]
    pub series_one: SeriesStyle,
    #[serde(alias = "two")]
    pub series_two: SeriesStyle,
    pub background: BackgroundStyle,
    #[serde(default)]
    pub one_arrow: Option<ArrowStyle>,
    #[serde(default)]
    pub two_arrow: Option<ArrowStyle>,
    #[serde(default)]
    pub baseline: Option<ReferenceLine>,
    #[serde(default)]
    pub target: Option<ReferenceLine>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub color: CssColor,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub legend_color: Option<CssColor>,
}

impl SeriesStyle {
    pub fn new(color: CssColor) -> Self {
        Self { color, legend: None, legend_color: None }
    }

    pub fn with_legend(mut self, legend: impl Into<String>, color: CssColor) -> Self {
        self.legend = Some(legend.into());
        self.legend_color = Some(color);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    pub color: CssColor,
    /// Bottom color of a vertical gradient starting at `color`.
    #[serde(default)]
    pub gradient: Option<CssColor>,
    /// Draw horizontal gridlines every `line_increment`.
    #[serde(default)]
    pub lines: bool,
    #[serde(default)]
    pub line_color: Option<CssColor>,
    #[serde(default)]
    pub line_increment: Option<f64>,
    /// Per-gridline label overrides, bottom line first.
    #[serde(default)]
    pub line_labels: Option<Vec<String>>,
    #[serde(default = "default_label_color")]
    pub line_labels_color: CssColor,
}

impl BackgroundStyle {
    pub fn solid(color: CssColor) -> Self {
        Self {
            color,
            gradient: None,
            lines: false,
            line_color: None,
            line_increment: None,
            line_labels: None,
            line_labels_color: default_label_color(),
        }
    }

    pub fn with_gridlines(mut self, color: CssColor, increment: f64) -> Self {
        self.lines = true;
        self.line_color = Some(color);
        self.line_increment = Some(increment);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowStyle {
    pub direction: ArrowDirection,
    #[serde(default)]
    pub outline: bool,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLine {
    pub value: f64,
    pub color: CssColor,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub label_color: Option<CssColor>,
}

impl ReferenceLine {
    pub fn new(value: f64, color: CssColor, line_style: LineStyle) -> Self {
        Self { value, color, line_style, label: None, label_color: None }
    }
}

impl ChartConfig {
    /// Configuration with the plugin defaults: padding 30, outline on, no
    /// left padding, no arrows and no reference lines.
    pub fn new(max_value: f64, series_one: SeriesStyle, series_two: SeriesStyle, background: BackgroundStyle) -> Self {
        Self {
            max_value,
            padding: default_padding(),
            padding_left: 0.0,
            outline: default_outline(),
            series_one,
            series_two,
            background,
            one_arrow: None,
            two_arrow: None,
            baseline: None,
            target: None,
        }
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the invariants drawing relies on.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(ChartError::config(format!("maxValue must be finite and > 0, got {}", self.max_value)));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::config("padding must be finite and >= 0"));
        }
        if !self.padding_left.is_finite() || self.padding_left < 0.0 {
            return Err(ChartError::config("paddingLeft must be finite and >= 0"));
        }
        let bg = &self.background;
        if bg.lines {
            if bg.line_color.is_none() {
                return Err(ChartError::config("background.lineColor is required when lines are enabled"));
            }
            match bg.line_increment {
                Some(inc) if inc.is_finite() && inc > 0.0 => {
                    if self.max_value / inc > MAX_GRIDLINES as f64 {
                        return Err(ChartError::config(format!(
                            "background.lineIncrement {inc} yields more than {MAX_GRIDLINES} gridlines up to maxValue {}",
                            self.max_value
                        )));
                    }
                }
                Some(inc) => {
                    return Err(ChartError::config(format!("background.lineIncrement must be > 0, got {inc}")));
                }
                None => {
                    return Err(ChartError::config("background.lineIncrement is required when lines are enabled"));
                }
            }
        }
        for (name, arrow) in [("oneArrow", &self.one_arrow), ("twoArrow", &self.two_arrow)] {
            if let Some(a) = arrow {
                if !(0.0..=1.0).contains(&a.opacity) {
                    return Err(ChartError::config(format!("{name}.opacity must be in [0, 1], got {}", a.opacity)));
                }
            }
        }
        for (name, line) in [("baseline", &self.baseline), ("target", &self.target)] {
            if let Some(l) = line {
                if !l.value.is_finite() {
                    return Err(ChartError::config(format!("{name}.value must be finite")));
                }
            }
        }
        Ok(())
    }
}

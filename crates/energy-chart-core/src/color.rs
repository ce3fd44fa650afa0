// File: crates/energy-chart-core/src/color.rs
// Summary: CSS color strings parsed into Skia colors at the configuration boundary.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use skia_safe as skia;

use crate::error::ChartError;

pub type Color = skia::Color;

/// A color given the way the campaign pages write them (`#7395bf`, `white`,
/// `rgba(0, 0, 0, 0.5)`), kept together with its source text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct CssColor {
    source: String,
    color: Color,
}

impl CssColor {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<Color> for CssColor {
    fn from(color: Color) -> Self {
        let source = if color.a() == 255 {
            format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
        } else {
            format!("rgba({}, {}, {}, {:.3})", color.r(), color.g(), color.b(), color.a() as f32 / 255.0)
        };
        Self { source, color }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for CssColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = parse(s).ok_or_else(|| ChartError::InvalidColor(s.to_owned()))?;
        Ok(Self { source: s.trim().to_owned(), color })
    }
}

impl TryFrom<String> for CssColor {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for CssColor {
    type Error = ChartError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Black at the given opacity (clamped to `[0, 1]`).
pub fn black_with_opacity(opacity: f32) -> Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::from_argb(a, 0, 0, 0)
}

fn parse(raw: &str) -> Option<Color> {
    let s = raw.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        return parse_functional(args, true);
    }
    if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_functional(args, false);
    }
    named(&s)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut ch = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            let (r, g, b) = (ch.next()??, ch.next()??, ch.next()??);
            Some(Color::from_rgb(r, g, b))
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Color::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
        }
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |p: &str| -> Option<u8> {
        let v: f32 = p.parse().ok()?;
        Some(v.clamp(0.0, 255.0).round() as u8)
    };
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let a = if with_alpha {
        let v: f32 = parts[3].parse().ok()?;
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        255
    };
    Some(Color::from_argb(a, r, g, b))
}

fn named(name: &str) -> Option<Color> {
    let rgb = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "grey" | "gray" => (128, 128, 128),
        "lightgrey" | "lightgray" => (211, 211, 211),
        "darkgrey" | "darkgray" => (169, 169, 169),
        "silver" => (192, 192, 192),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "transparent" => return Some(Color::TRANSPARENT),
        _ => return None,
    };
    Some(Color::from_rgb(rgb.0, rgb.1, rgb.2))
}

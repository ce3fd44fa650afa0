// File: crates/energy-chart-core/src/text.rs
// Summary: Overlay text styles, text measurement backends and the Skia text shaper.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as SkTextStyle};

use crate::color::Color;
use crate::types::BASE_FONT_PX;

/// Pixel extent of a laid-out piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Presentation of an overlay node: a style class name, optional text and
/// box colors, and a font size.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub class: Option<String>,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub font_size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { class: None, color: None, background: None, font_size: BASE_FONT_PX }
    }
}

impl TextStyle {
    pub fn class(name: impl Into<String>) -> Self {
        Self { class: Some(name.into()), ..Self::default() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class.as_deref() == Some(name)
    }
}

/// Answers how large text would be on screen.
pub trait TextMeasure {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize;
}

/// Deterministic metrics: every glyph advances `advance` em, lines are
/// `line_height` em tall. Independent of installed fonts.
#[derive(Clone, Copy, Debug)]
pub struct FixedTextMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedTextMeasure {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.2 }
    }
}

impl TextMeasure for FixedTextMeasure {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize {
        if text.is_empty() {
            return TextSize::default();
        }
        let lines = text.lines().count().max(1);
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        TextSize {
            width: longest as f32 * style.font_size * self.advance,
            height: lines as f32 * style.font_size * self.line_height,
        }
    }
}

/// Measures with Skia paragraph layout and the system font manager.
pub struct SkiaTextMeasure {
    shaper: TextShaper,
}

impl SkiaTextMeasure {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }
}

impl Default for SkiaTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for SkiaTextMeasure {
    fn measure(&self, text: &str, style: &TextStyle) -> TextSize {
        let p = self.shaper.layout(text, style.font_size, Color::TRANSPARENT);
        TextSize { width: p.longest_line(), height: p.height() }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: Color) -> SkTextStyle {
        let mut ts = SkTextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its box's top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: Color) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

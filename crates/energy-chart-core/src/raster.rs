// File: crates/energy-chart-core/src/raster.rs
// Summary: Headless rasterization of a recorded surface using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::surface::{DrawCommand, DrawSurface, Fill, PathData};
use crate::text::TextShaper;

/// Padding around overlay text that has a background box.
const OVERLAY_BOX_PADDING: f32 = 2.0;

pub struct RasterOptions {
    /// Paint overlay text (legends, labels, tooltips) on top of the drawing.
    pub draw_labels: bool,
    /// Color the surface is cleared to before replaying.
    pub background: Color,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { draw_labels: true, background: Color::WHITE }
    }
}

impl DrawSurface<'_> {
    /// Rasterize to PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RasterOptions) -> ChartResult<Vec<u8>> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Raster("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Rasterize to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&self, opts: &RasterOptions, output_png_path: impl AsRef<Path>) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Rasterize to unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RasterOptions) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(opts)?;
        let (w, h) = (self.width(), self.height());
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Raster("read pixels failed".into()));
        }
        Ok((pixels, w, h, stride))
    }

    fn rasterize(&self, opts: &RasterOptions) -> ChartResult<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width() as i32, self.height() as i32))
            .ok_or_else(|| ChartError::Raster("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(opts.background);

        for command in self.commands() {
            replay(canvas, command, self.height_f());
        }
        if opts.draw_labels {
            self.paint_overlays(canvas);
        }
        Ok(surface)
    }

    fn paint_overlays(&self, canvas: &skia::Canvas) {
        let shaper = TextShaper::new();
        for (_, overlay) in self.placeholder().overlays() {
            let at = self.page_to_canvas(overlay.left, overlay.top);
            let color = overlay.style.color.unwrap_or(Color::BLACK);
            if let Some(bg) = overlay.style.background {
                let p = shaper.layout(&overlay.text, overlay.style.font_size, color);
                let rect = skia::Rect::from_xywh(
                    at.x - OVERLAY_BOX_PADDING,
                    at.y - OVERLAY_BOX_PADDING,
                    p.longest_line() + 2.0 * OVERLAY_BOX_PADDING,
                    p.height() + 2.0 * OVERLAY_BOX_PADDING,
                );
                canvas.draw_rect(rect, &fill_paint(bg));
            }
            shaper.draw_top_left(canvas, &overlay.text, at.x, at.y, overlay.style.font_size, color);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn replay(canvas: &skia::Canvas, command: &DrawCommand, surface_height: f32) {
    match command {
        DrawCommand::FillRect { rect, fill } => {
            canvas.draw_rect(to_sk_rect(rect), &paint_for(fill, surface_height));
        }
        DrawCommand::StrokeRect { rect, color, width } => {
            canvas.draw_rect(to_sk_rect(rect), &stroke_paint(*color, *width));
        }
        DrawCommand::FillPath { path, fill } => {
            canvas.draw_path(&to_sk_path(path), &paint_for(fill, surface_height));
        }
        DrawCommand::StrokePath { path, color, width } => {
            canvas.draw_path(&to_sk_path(path), &stroke_paint(*color, *width));
        }
        DrawCommand::FillCircle { center, radius, color } => {
            canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*color));
        }
        DrawCommand::StrokeCircle { center, radius, color, width } => {
            canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(*color, *width));
        }
    }
}

fn to_sk_rect(r: &RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn to_sk_path(data: &PathData) -> skia::Path {
    let mut path = skia::PathBuilder::new();
    for sub in &data.subpaths {
        let Some((first, rest)) = sub.points.split_first() else { continue };
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        if sub.closed {
            path.close();
        }
    }
    path.detach()
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn paint_for(fill: &Fill, surface_height: f32) -> skia::Paint {
    match *fill {
        Fill::Solid(color) => fill_paint(color),
        Fill::VerticalGradient { top, bottom } => {
            let mut paint = fill_paint(top);
            let colors = [top, bottom];
            if let Some(shader) = skia::Shader::linear_gradient(
                ((0.0, 0.0), (0.0, surface_height)),
                &colors[..],
                None,
                skia::TileMode::Clamp,
                None,
                None,
            ) {
                paint.set_shader(shader);
            }
            paint
        }
    }
}

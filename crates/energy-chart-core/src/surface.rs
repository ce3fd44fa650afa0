// File: crates/energy-chart-core/src/surface.rs
// Summary: Drawing surface bound to a placeholder; records draw commands in device pixels.
// Notes:
// - The surface mirrors a 2D canvas context: a save/restore state stack, a
//   current transform, and a path builder. Every command is stored already
//   mapped through the transform, so the display list is backend neutral.
// - Rasterization of the display list lives in `raster.rs`.

use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Affine, Point, RectF};
use crate::placeholder::{NodeId, Overlay, Placeholder};
use crate::text::{TextSize, TextStyle};

/// Paint used to fill an area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Linear gradient from `top` (y = 0) to `bottom` (y = surface height).
    VerticalGradient { top: Color, bottom: Color },
}

/// One polyline of a path.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PathData {
    pub subpaths: Vec<SubPath>,
}

impl PathData {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.subpaths.iter().flat_map(|s| s.points.iter().copied())
    }

    pub fn bounds(&self) -> Option<RectF> {
        RectF::bounding(&self.points().collect::<Vec<_>>())
    }

    /// Open two-point subpaths as `(start, end)` segments.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.subpaths
            .iter()
            .filter(|s| s.points.len() == 2 && !s.closed)
            .map(|s| (s.points[0], s.points[1]))
            .collect()
    }
}

/// A recorded drawing operation in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: RectF, fill: Fill },
    StrokeRect { rect: RectF, color: Color, width: f32 },
    FillPath { path: PathData, fill: Fill },
    StrokePath { path: PathData, color: Color, width: f32 },
    FillCircle { center: Point, radius: f32, color: Color },
    StrokeCircle { center: Point, radius: f32, color: Color, width: f32 },
}

#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Affine,
    stroke: Color,
    fill: Fill,
    line_width: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self { transform: Affine::IDENTITY, stroke: Color::BLACK, fill: Fill::Solid(Color::BLACK), line_width: 1.0 }
    }
}

/// A raster target sized to its placeholder at creation time.
///
/// The surface exclusively borrows the placeholder for as long as it lives,
/// so two renders can never interleave on the same container.
pub struct DrawSurface<'p> {
    placeholder: &'p mut dyn Placeholder,
    node: NodeId,
    width: u32,
    height: u32,
    state: DrawState,
    saved: Vec<DrawState>,
    path: PathData,
    commands: Vec<DrawCommand>,
}

/// Create a fresh surface inside `placeholder`.
///
/// Fails with [`ChartError::InvalidDimensions`] when the placeholder has no
/// drawable area; the placeholder is left untouched in that case. Otherwise
/// existing children are removed and the new surface becomes the only child.
pub fn create_draw_surface(placeholder: &mut dyn Placeholder) -> ChartResult<DrawSurface<'_>> {
    let (width, height) = placeholder.size();
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidDimensions { width, height });
    }
    placeholder.clear();
    let node = placeholder.attach_surface(width as u32, height as u32);
    debug!(width, height, "created draw surface");
    Ok(DrawSurface {
        placeholder,
        node,
        width: width as u32,
        height: height as u32,
        state: DrawState::default(),
        saved: Vec::new(),
        path: PathData::default(),
        commands: Vec::new(),
    })
}

impl<'p> DrawSurface<'p> {
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn width_f(&self) -> f32 { self.width as f32 }
    pub fn height_f(&self) -> f32 { self.height as f32 }

    /// Node id of the surface inside its placeholder.
    pub fn node(&self) -> NodeId { self.node }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn placeholder(&self) -> &dyn Placeholder { &*self.placeholder }

    /// Depth of the save stack; zero outside any scoped drawing.
    pub fn save_depth(&self) -> usize { self.saved.len() }

    // ---- state --------------------------------------------------------------

    /// Push the drawing state; it is restored when the guard drops.
    pub fn save(&mut self) -> SavedState<'_, 'p> {
        self.saved.push(self.state);
        SavedState { surface: self }
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) { self.state.stroke = color; }
    pub fn set_fill(&mut self, fill: Fill) { self.state.fill = fill; }
    pub fn set_fill_color(&mut self, color: Color) { self.state.fill = Fill::Solid(color); }
    pub fn set_line_width(&mut self, width: f32) { self.state.line_width = width; }

    pub fn translate(&mut self, dx: f32, dy: f32) { self.state.transform = self.state.transform.translate(dx, dy); }
    pub fn scale(&mut self, sx: f32, sy: f32) { self.state.transform = self.state.transform.scale(sx, sy); }
    pub fn rotate(&mut self, radians: f32) { self.state.transform = self.state.transform.rotate(radians); }

    // ---- paths --------------------------------------------------------------

    pub fn begin_path(&mut self) {
        self.path = PathData::default();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let p = self.state.transform.map(Point::new(x, y));
        self.path.subpaths.push(SubPath { points: vec![p], closed: false });
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        let p = self.state.transform.map(Point::new(x, y));
        match self.path.subpaths.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            _ => self.path.subpaths.push(SubPath { points: vec![p], closed: false }),
        }
    }

    pub fn close_path(&mut self) {
        if let Some(sub) = self.path.subpaths.last_mut() {
            sub.closed = true;
        }
    }

    pub fn stroke(&mut self) {
        if self.path.subpaths.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::StrokePath {
            path: self.path.clone(),
            color: self.state.stroke,
            width: self.state.line_width,
        });
    }

    pub fn fill(&mut self) {
        if self.path.subpaths.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::FillPath { path: self.path.clone(), fill: self.state.fill });
    }

    // ---- shapes -------------------------------------------------------------

    fn map_rect(&self, x: f32, y: f32, width: f32, height: f32) -> RectF {
        let t = &self.state.transform;
        let a = t.map(Point::new(x, y));
        let b = t.map(Point::new(x + width, y + height));
        RectF::from_ltrb(a.x, a.y, b.x, b.y).normalized()
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.map_rect(x, y, width, height);
        self.commands.push(DrawCommand::FillRect { rect, fill: self.state.fill });
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = self.map_rect(x, y, width, height);
        self.commands.push(DrawCommand::StrokeRect { rect, color: self.state.stroke, width: self.state.line_width });
    }

    /// Marker circle filled with `fill` and outlined with the stroke color.
    pub fn point_marker(&mut self, x: f32, y: f32, radius: f32, fill: Color) {
        let center = self.state.transform.map(Point::new(x, y));
        self.commands.push(DrawCommand::FillCircle { center, radius, color: fill });
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: self.state.stroke,
            width: self.state.line_width,
        });
    }

    // ---- overlays -----------------------------------------------------------

    /// Convert surface coordinates into page coordinates.
    pub fn canvas_to_page(&self, x: f32, y: f32) -> Point {
        let pos = self.placeholder.position();
        Point::new(pos.x + x, pos.y + y)
    }

    /// Convert page coordinates into surface coordinates.
    pub fn page_to_canvas(&self, x: f32, y: f32) -> Point {
        let pos = self.placeholder.position();
        Point::new(x - pos.x, y - pos.y)
    }

    /// How large `text` would be if rendered with `style`.
    ///
    /// A temporary probe node is inserted for the measurement and removed
    /// before returning.
    pub fn measure_text(&mut self, text: &str, style: &TextStyle) -> TextSize {
        measure_in(&mut *self.placeholder, text, style)
    }

    /// Place `text` over the surface with its top-left corner at surface
    /// coordinates `(x, y)`.
    pub fn overlay_text(&mut self, text: &str, style: &TextStyle, x: f32, y: f32) -> NodeId {
        let page = self.canvas_to_page(x, y);
        self.placeholder.insert_overlay(Overlay::new(text, style.clone(), page.x, page.y))
    }

    /// Insert an overlay already expressed in page coordinates.
    pub fn insert_page_overlay(&mut self, overlay: Overlay) -> NodeId {
        self.placeholder.insert_overlay(overlay)
    }

    pub fn remove_overlay(&mut self, id: NodeId) -> bool {
        self.placeholder.remove(id)
    }
}

/// Scoped drawing state; dereferences to the surface and restores the state
/// pushed by [`DrawSurface::save`] on drop.
pub struct SavedState<'s, 'p> {
    surface: &'s mut DrawSurface<'p>,
}

impl<'p> Deref for SavedState<'_, 'p> {
    type Target = DrawSurface<'p>;
    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl DerefMut for SavedState<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl Drop for SavedState<'_, '_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Temporary measurement node, removed from its placeholder on drop.
/// Measure `text` with a temporary node in `placeholder`, which is left
/// as it was found. Usable before a surface exists.
pub fn measure_in(placeholder: &mut dyn Placeholder, text: &str, style: &TextStyle) -> TextSize {
    let probe = MeasureProbe::insert(placeholder, Overlay::new(text, style.clone(), 0.0, 0.0));
    match probe.extent() {
        Some(size) => size,
        None => {
            warn!(text, "placeholder returned no extent for measurement probe");
            TextSize::default()
        }
    }
}

struct MeasureProbe<'a> {
    placeholder: &'a mut dyn Placeholder,
    id: NodeId,
}

impl<'a> MeasureProbe<'a> {
    fn insert(placeholder: &'a mut dyn Placeholder, overlay: Overlay) -> Self {
        let id = placeholder.insert_overlay(overlay);
        Self { placeholder, id }
    }

    fn extent(&self) -> Option<TextSize> {
        self.placeholder.extent(self.id)
    }
}

impl Drop for MeasureProbe<'_> {
    fn drop(&mut self) {
        self.placeholder.remove(self.id);
    }
}

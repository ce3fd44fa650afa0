// File: crates/energy-chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, rects, affine transforms).

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }

    /// Smallest rectangle containing every point; `None` for an empty slice.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut r = Self::from_ltrb(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            r.left = r.left.min(p.x);
            r.right = r.right.max(p.x);
            r.top = r.top.min(p.y);
            r.bottom = r.bottom.max(p.y);
        }
        Some(r)
    }

    /// Swap edges so that `left <= right` and `top <= bottom`.
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            right: self.left.max(self.right),
            top: self.top.min(self.bottom),
            bottom: self.top.max(self.bottom),
        }
    }
}

/// 2x3 affine matrix, composed the way a 2D canvas context composes
/// `translate`/`scale`/`rotate` (each call post-multiplies the current matrix).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    fn then(self, m: Affine) -> Affine {
        // self * m
        Affine {
            a: self.a * m.a + self.c * m.b,
            b: self.b * m.a + self.d * m.b,
            c: self.a * m.c + self.c * m.d,
            d: self.b * m.c + self.d * m.d,
            e: self.a * m.e + self.c * m.f + self.e,
            f: self.b * m.e + self.d * m.f + self.f,
        }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Affine {
        self.then(Affine { e: dx, f: dy, ..Self::IDENTITY })
    }

    pub fn scale(self, sx: f32, sy: f32) -> Affine {
        self.then(Affine { a: sx, d: sy, ..Self::IDENTITY })
    }

    /// Rotate by `radians`, clockwise on a y-down surface.
    pub fn rotate(self, radians: f32) -> Affine {
        let (sin, cos) = radians.sin_cos();
        self.then(Affine { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 })
    }

    pub fn map(&self, p: Point) -> Point {
        Point::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }
}

//! Geometry helpers: axis-aligned boxes, point-set bounds and segment distance.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::camera::Point;
use crate::consts::MIN_SHAPE_SIZE;
use crate::doc::{Shape, ShapeKind};

/// An axis-aligned box in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self { x, y, width: (a.x - b.x).abs(), height: (a.y - b.y).abs() }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether `p` lies inside the box grown by `pad` on every side. Edges count.
    #[must_use]
    pub fn contains(&self, p: Point, pad: f64) -> bool {
        p.x >= self.x - pad && p.x <= self.right() + pad && p.y >= self.y - pad && p.y <= self.bottom() + pad
    }

    /// Whether the two boxes touch or overlap.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right() && self.right() >= other.x && self.y <= other.bottom() && self.bottom() >= other.y
    }

    /// Area shared by the two boxes; zero when they are disjoint.
    #[must_use]
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = (self.right().min(other.right()) - self.x.max(other.x)).max(0.0);
        let h = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0.0);
        w * h
    }
}

/// Axis-aligned box spanning all `points`.
///
/// Returns an all-zero box for an empty slice. Otherwise width and height are
/// floored to [`MIN_SHAPE_SIZE`] so the result is never degenerate.
#[must_use]
pub fn bounding_box(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::default();
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect {
        x: min_x,
        y: min_y,
        width: (max_x - min_x).max(MIN_SHAPE_SIZE),
        height: (max_y - min_y).max(MIN_SHAPE_SIZE),
    }
}

/// Multiply every point by `scale`, component-wise.
#[must_use]
pub fn transform_points(points: &[Point], scale: Point) -> Vec<Point> {
    points.iter().map(|p| p.scale_by(scale)).collect()
}

/// The box a shape actually occupies in canvas space.
///
/// Pencils use their scaled points offset by the origin; lines use the
/// normalized segment box; everything else uses `(x, y, width, height)`.
#[must_use]
pub fn shape_bounds(shape: &Shape) -> Rect {
    match &shape.kind {
        ShapeKind::Pencil { points } => {
            let local = bounding_box(&transform_points(points, shape.scale));
            Rect { x: shape.x + local.x, y: shape.y + local.y, ..local }
        }
        ShapeKind::Line { start_point, end_point } => Rect::from_corners(*start_point, *end_point),
        _ => Rect::new(shape.x, shape.y, shape.width, shape.height),
    }
}

/// Distance from `p` to the segment `a`-`b`, clamping the projection to the segment.
#[must_use]
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let d = b - a;
    let len_sq = d.x * d.x + d.y * d.y;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * d.x + (p.y - a.y) * d.y) / len_sq).clamp(0.0, 1.0)
    };
    let proj = Point::new(a.x + t * d.x, a.y + t * d.y);
    (p.x - proj.x).hypot(p.y - proj.y)
}

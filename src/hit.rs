//! Hit-testing: point-in-shape, selection-box intersection and resize handles.
//!
//! Shapes are tested in reverse creation order so the most recently created
//! shape wins on overlap. Handle hits are only considered on selected shapes
//! and take priority over body hits.
//!
//! Frames are hit only on their border band (`FRAME_BORDER_HIT_WIDTH` inside
//! each edge, `tolerance` outside). Clicking a frame's interior passes through
//! to whatever lies inside it, or to empty canvas.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::FRAME_BORDER_HIT_WIDTH;
use crate::doc::{Shape, ShapeId, ShapeKind};
use crate::geometry::{Rect, point_segment_distance, shape_bounds};

/// Named grab point that drives a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// First endpoint of a line.
    Start,
    /// Second endpoint of a line.
    End,
}

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Handle(ResizeHandle),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Shape-specific point containment with `tolerance` slop in canvas units.
#[must_use]
pub fn point_in_shape(shape: &Shape, point: Point, tolerance: f64) -> bool {
    match &shape.kind {
        ShapeKind::Rectangle { .. } => shape_bounds(shape).contains(point, tolerance),
        ShapeKind::Frame { .. } => point_on_frame_border(&shape_bounds(shape), point, tolerance),
        ShapeKind::Circle => {
            let center = Point::new(shape.x + shape.width / 2.0, shape.y + shape.height / 2.0);
            let radius = shape.width.min(shape.height) / 2.0;
            (point.x - center.x).hypot(point.y - center.y) <= radius + tolerance
        }
        ShapeKind::Line { start_point, end_point } => {
            point_segment_distance(point, *start_point, *end_point) <= tolerance
        }
        ShapeKind::Pencil { .. } => shape_bounds(shape).contains(point, tolerance),
        ShapeKind::Text { .. } => shape_bounds(shape).contains(point, 0.0),
    }
}

fn point_on_frame_border(b: &Rect, p: Point, tolerance: f64) -> bool {
    if !b.contains(p, tolerance) {
        return false;
    }
    let near_top = p.y <= b.y + FRAME_BORDER_HIT_WIDTH;
    let near_bottom = p.y >= b.bottom() - FRAME_BORDER_HIT_WIDTH;
    let near_left = p.x <= b.x + FRAME_BORDER_HIT_WIDTH;
    let near_right = p.x >= b.right() - FRAME_BORDER_HIT_WIDTH;
    near_top || near_bottom || near_left || near_right
}

/// Whether the shape's box intersects the selection box spanned by `start` and `end`.
#[must_use]
pub fn is_shape_in_selection_box(shape: &Shape, start: Point, end: Point) -> bool {
    shape_bounds(shape).intersects(&Rect::from_corners(start, end))
}

/// Index of the topmost shape under `point`, if any.
#[must_use]
pub fn topmost_shape_at(shapes: &[Shape], point: Point, tolerance: f64) -> Option<usize> {
    shapes.iter().rposition(|s| point_in_shape(s, point, tolerance))
}

/// Grab points for a shape: the four corners of its box, or the two line endpoints.
#[must_use]
pub fn handle_positions(shape: &Shape) -> Vec<(ResizeHandle, Point)> {
    if let Some((start, end)) = shape.endpoints() {
        return vec![(ResizeHandle::Start, start), (ResizeHandle::End, end)];
    }
    let b = shape_bounds(shape);
    vec![
        (ResizeHandle::TopLeft, Point::new(b.x, b.y)),
        (ResizeHandle::TopRight, Point::new(b.right(), b.y)),
        (ResizeHandle::BottomLeft, Point::new(b.x, b.bottom())),
        (ResizeHandle::BottomRight, Point::new(b.right(), b.bottom())),
    ]
}

/// Topmost selected shape whose handle lies within `radius` of `point`.
#[must_use]
pub fn handle_at(shapes: &[Shape], point: Point, radius: f64) -> Option<(ShapeId, ResizeHandle)> {
    shapes.iter().rev().filter(|s| s.is_selected).find_map(|s| {
        handle_positions(s)
            .into_iter()
            .find(|(_, h)| (point.x - h.x).hypot(point.y - h.y) <= radius)
            .map(|(handle, _)| (s.id, handle))
    })
}

/// Test what is under `point`: selected-shape handles first, then shape bodies.
///
/// `handle_radius` and `tolerance` are both in canvas units.
#[must_use]
pub fn hit_test(shapes: &[Shape], point: Point, tolerance: f64, handle_radius: f64) -> Option<Hit> {
    if let Some((shape_id, handle)) = handle_at(shapes, point, handle_radius) {
        return Some(Hit { shape_id, part: HitPart::Handle(handle) });
    }
    topmost_shape_at(shapes, point, tolerance).map(|i| Hit { shape_id: shapes[i].id, part: HitPart::Body })
}

//! Handle-driven resize math and the per-gesture resize session.
//!
//! A resize runs `Idle -> Resizing -> Idle`: [`ResizeEngine::start_resize`]
//! snapshots the shape and the grabbed handle, every pointer move calls
//! [`ResizeEngine::calculate_resize`] for an incremental [`ShapeUpdate`], and
//! [`ResizeEngine::end_resize`] drops the session.
//!
//! Movement is measured from the previous emitted step, not from drag start.
//! Each axis below the movement threshold counts as zero, and a step with no
//! movement on either axis emits nothing.
//!
//! Corner handles hold the diagonally opposite corner fixed. Extents are
//! clamped to the minimum resize size, so dragging a handle past the opposite
//! edge pins the shape at that size rather than flipping it. With
//! `keep_aspect_ratio` the axis with the larger movement drives and the other
//! extent is derived from the current aspect ratio.
//!
//! Pencils are resized by changing `scale`; their raw points are never rewritten.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::camera::Point;
use crate::consts::{MIN_RESIZE_SIZE, MIN_SHAPE_SIZE, MOVEMENT_THRESHOLD};
use crate::doc::{Shape, ShapeId, ShapeKind, ShapeUpdate};
use crate::geometry::{Rect, bounding_box, shape_bounds};
use crate::hit::ResizeHandle;

/// State captured when a resize gesture begins.
#[derive(Debug, Clone)]
struct ResizeSession {
    /// The shape at session start. Steps work from the live shape; this copy
    /// is kept for hosts that preview against, or restore, the pre-drag state.
    original: Shape,
    handle: ResizeHandle,
    start_point: Point,
    last_point: Point,
    /// Bounds of the raw pencil points at session start.
    points_box: Rect,
}

/// Tracks at most one active resize and turns pointer movement into updates.
#[derive(Debug, Clone)]
pub struct ResizeEngine {
    session: Option<ResizeSession>,
    min_size: f64,
    threshold: f64,
}

impl Default for ResizeEngine {
    fn default() -> Self {
        Self::new(MIN_RESIZE_SIZE, MOVEMENT_THRESHOLD)
    }
}

impl ResizeEngine {
    #[must_use]
    pub fn new(min_size: f64, threshold: f64) -> Self {
        Self { session: None, min_size, threshold }
    }

    /// Begin resizing `shape` from `handle`, replacing any session in progress.
    pub fn start_resize(&mut self, shape: &Shape, handle: ResizeHandle, start_point: Point) {
        tracing::debug!(shape_id = %shape.id, ?handle, "resize started");
        let points_box = shape.points().map_or_else(Rect::default, bounding_box);
        self.session = Some(ResizeSession {
            original: shape.clone(),
            handle,
            start_point,
            last_point: start_point,
            points_box,
        });
    }

    /// Whether a resize session is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// The handle being dragged, if resizing.
    #[must_use]
    pub fn handle(&self) -> Option<ResizeHandle> {
        self.session.as_ref().map(|s| s.handle)
    }

    /// Id of the shape being resized, if resizing.
    #[must_use]
    pub fn shape_id(&self) -> Option<ShapeId> {
        self.session.as_ref().map(|s| s.original.id)
    }

    /// Canvas point where the current resize began.
    #[must_use]
    pub fn start_point(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.start_point)
    }

    /// The shape as it was when the session started, for previews and restores.
    #[must_use]
    pub fn original(&self) -> Option<&Shape> {
        self.session.as_ref().map(|s| &s.original)
    }

    /// Compute the update produced by moving the pointer to `current_point`.
    ///
    /// Returns an empty update when no session is active, when movement on
    /// both axes is below the threshold, or when the handle does not apply to
    /// the shape's kind.
    pub fn calculate_resize(&mut self, shape: &Shape, current_point: Point, keep_aspect_ratio: bool) -> ShapeUpdate {
        let Some(session) = self.session.as_mut() else {
            return ShapeUpdate::default();
        };

        let dx = current_point.x - session.last_point.x;
        let dy = current_point.y - session.last_point.y;
        let mx = if dx.abs() >= self.threshold { dx } else { 0.0 };
        let my = if dy.abs() >= self.threshold { dy } else { 0.0 };
        if mx == 0.0 && my == 0.0 {
            return ShapeUpdate::default();
        }
        session.last_point = current_point;

        let movement = Point::new(mx, my);
        match &shape.kind {
            ShapeKind::Line { .. } => line_resize(shape, session.handle, current_point),
            ShapeKind::Pencil { .. } => {
                pencil_resize(shape, session.points_box, session.handle, movement, keep_aspect_ratio, self.min_size)
            }
            _ if shape.shape_type().is_box_like() => {
                box_resize(shape, session.handle, movement, keep_aspect_ratio, self.min_size)
            }
            _ => ShapeUpdate::default(),
        }
    }

    /// Drop the active session, if any.
    pub fn end_resize(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(shape_id = %session.original.id, "resize ended");
        }
    }
}

/// Move one endpoint of a line to `current_point`, keeping the other fixed.
#[must_use]
pub fn line_resize(shape: &Shape, handle: ResizeHandle, current_point: Point) -> ShapeUpdate {
    let end = Point::new(shape.x + shape.width, shape.y + shape.height);
    match handle {
        ResizeHandle::Start => ShapeUpdate::geometry(
            current_point.x,
            current_point.y,
            end.x - current_point.x,
            end.y - current_point.y,
        ),
        ResizeHandle::End => {
            ShapeUpdate::geometry(shape.x, shape.y, current_point.x - shape.x, current_point.y - shape.y)
        }
        _ => ShapeUpdate::default(),
    }
}

/// Resize a box-like shape from a corner handle.
///
/// Extents are clamped to `min_size` during the drag and floored to
/// [`MIN_SHAPE_SIZE`] afterwards.
#[must_use]
pub fn box_resize(shape: &Shape, handle: ResizeHandle, movement: Point, keep_aspect_ratio: bool, min_size: f64) -> ShapeUpdate {
    let current = Rect::new(shape.x, shape.y, shape.width, shape.height);
    match resize_rect(current, handle, movement, keep_aspect_ratio, min_size) {
        Some(r) => ShapeUpdate::geometry(r.x, r.y, r.width, r.height),
        None => ShapeUpdate::default(),
    }
}

/// Resize a pencil stroke by rescaling its points.
///
/// The stroke's visible box is resized like any box, then `scale` becomes the
/// new size over `points_box` (the raw points' bounds) and the origin is moved
/// so the scaled points land inside the new box.
#[must_use]
pub fn pencil_resize(
    shape: &Shape,
    points_box: Rect,
    handle: ResizeHandle,
    movement: Point,
    keep_aspect_ratio: bool,
    min_size: f64,
) -> ShapeUpdate {
    let current = shape_bounds(shape);
    let Some(r) = resize_rect(current, handle, movement, keep_aspect_ratio, min_size) else {
        return ShapeUpdate::default();
    };
    let scale = Point::new(r.width / nonzero(points_box.width), r.height / nonzero(points_box.height));
    ShapeUpdate {
        x: Some(r.x - points_box.x * scale.x),
        y: Some(r.y - points_box.y * scale.y),
        width: Some(r.width),
        height: Some(r.height),
        scale: Some(scale),
        ..Default::default()
    }
}

fn nonzero(v: f64) -> f64 {
    if v == 0.0 { 1.0 } else { v }
}

/// Resize `r` by dragging `handle`, holding the opposite corner fixed.
///
/// Returns `None` for handles that are not box corners.
fn resize_rect(r: Rect, handle: ResizeHandle, movement: Point, keep_aspect_ratio: bool, min_size: f64) -> Option<Rect> {
    let (moves_left, moves_top) = match handle {
        ResizeHandle::TopLeft => (true, true),
        ResizeHandle::TopRight => (false, true),
        ResizeHandle::BottomLeft => (true, false),
        ResizeHandle::BottomRight => (false, false),
        ResizeHandle::Start | ResizeHandle::End => return None,
    };
    let grow_x = if moves_left { -movement.x } else { movement.x };
    let grow_y = if moves_top { -movement.y } else { movement.y };

    let mut width = (r.width + grow_x).max(min_size);
    let mut height = (r.height + grow_y).max(min_size);

    if keep_aspect_ratio && r.width > 0.0 && r.height > 0.0 {
        let aspect = r.width / r.height;
        if movement.x.abs() > movement.y.abs() {
            height = width / aspect;
        } else {
            width = height * aspect;
        }
    }

    width = width.max(MIN_SHAPE_SIZE);
    height = height.max(MIN_SHAPE_SIZE);

    let x = if moves_left { r.right() - width } else { r.x };
    let y = if moves_top { r.bottom() - height } else { r.y };
    Some(Rect::new(x, y, width, height))
}

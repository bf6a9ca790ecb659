//! Shape-collection edits: creation, moves, strokes, delete, clipboard, text.
//!
//! Every function here is pure over the collection it is given and returns a
//! new one; committing the result to history is the caller's job.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{
    DEFAULT_FONT_SIZE, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_SHAPE_SIZE, DEFAULT_TEXT_HEIGHT,
    DEFAULT_TEXT_WIDTH, MIN_SHAPE_SIZE, MIN_TEXT_HEIGHT, MIN_TEXT_WIDTH, PASTE_OFFSET, TEXT_PADDING,
};
use crate::doc::{Shape, ShapeKind, ShapeStyle, ShapeType, ShapeUpdate};
use crate::frame::{carried_shape_ids, frame_name, get_next_frame_number};
use crate::geometry::{Rect, bounding_box};

// =============================================================================
// CREATION
// =============================================================================

/// Build the shape a drawing drag from `start` to `end` produces.
///
/// Lines are always created. Any other kind returns `None` when the drag has
/// no extent on either axis; callers substitute [`default_click_end`] for a
/// click without a drag. Box-like shapes are normalized so `(x, y)` is the
/// top-left corner whichever way the drag went, and circles use a square
/// whose side is the larger drag axis.
#[must_use]
pub fn create_shape(shape_type: ShapeType, start: Point, end: Point, style: &ShapeStyle, existing: &[Shape]) -> Option<Shape> {
    if shape_type == ShapeType::Line {
        return Some(Shape::line(start, end, style));
    }

    let delta = end - start;
    if delta.x == 0.0 && delta.y == 0.0 {
        return None;
    }

    if shape_type == ShapeType::Pencil {
        let mut stroke = begin_stroke(start, style);
        extend_stroke(&mut stroke, end);
        return Some(stroke);
    }

    let bounds = if shape_type == ShapeType::Circle {
        let side = delta.x.abs().max(delta.y.abs());
        let x = if delta.x < 0.0 { start.x - side } else { start.x };
        let y = if delta.y < 0.0 { start.y - side } else { start.y };
        Rect::new(x, y, side, side)
    } else {
        Rect::from_corners(start, end)
    };

    let kind = match shape_type {
        ShapeType::Circle => ShapeKind::Circle,
        ShapeType::Frame => ShapeKind::Frame { name: frame_name(get_next_frame_number(existing)) },
        ShapeType::Text => ShapeKind::Text { text: String::new(), font_size: DEFAULT_FONT_SIZE },
        _ => ShapeKind::rectangle(),
    };
    Some(Shape::new(
        kind,
        bounds.x,
        bounds.y,
        bounds.width.max(MIN_SHAPE_SIZE),
        bounds.height.max(MIN_SHAPE_SIZE),
        style,
    ))
}

/// The end point a click without a drag stands in for.
///
/// Frames open at 1200x720, text boxes at 200x50, pencils stay a dot, and
/// every other kind gets an 80x80 box.
#[must_use]
pub fn default_click_end(shape_type: ShapeType, start: Point) -> Point {
    let (w, h) = match shape_type {
        ShapeType::Frame => (DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT),
        ShapeType::Text => (DEFAULT_TEXT_WIDTH, DEFAULT_TEXT_HEIGHT),
        ShapeType::Pencil => (0.0, 0.0),
        _ => (DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE),
    };
    Point::new(start.x + w, start.y + h)
}

// =============================================================================
// PENCIL STROKES
// =============================================================================

/// Start a pencil stroke at `start` with a single point at its origin.
#[must_use]
pub fn begin_stroke(start: Point, style: &ShapeStyle) -> Shape {
    let kind = ShapeKind::Pencil { points: vec![Point::ZERO] };
    Shape::new(kind, start.x, start.y, MIN_SHAPE_SIZE, MIN_SHAPE_SIZE, style)
}

/// Append the canvas point `point` to a pencil stroke.
///
/// The point is stored relative to the stroke origin and divided by the
/// current scale, then `width`/`height` are refreshed from the scaled bounds.
/// Non-pencil shapes are left unchanged.
pub fn extend_stroke(shape: &mut Shape, point: Point) {
    let origin = Point::new(shape.x, shape.y);
    let scale = shape.scale;
    let ShapeKind::Pencil { points } = &mut shape.kind else {
        return;
    };
    let offset = point - origin;
    points.push(Point::new(offset.x / nonzero(scale.x), offset.y / nonzero(scale.y)));
    let raw = bounding_box(points);
    shape.width = (raw.width * scale.x.abs()).max(MIN_SHAPE_SIZE);
    shape.height = (raw.height * scale.y.abs()).max(MIN_SHAPE_SIZE);
}

fn nonzero(v: f64) -> f64 {
    if v == 0.0 { 1.0 } else { v }
}

// =============================================================================
// MOVE / DELETE
// =============================================================================

/// Translate every selected shape, and every shape carried by a selected
/// frame, by `current - start`.
#[must_use]
pub fn update_shape_position(shapes: &[Shape], start: Point, current: Point) -> Vec<Shape> {
    let carried = carried_shape_ids(shapes);
    let delta = current - start;
    shapes
        .iter()
        .map(|s| {
            let mut next = s.clone();
            if carried.contains(&s.id) {
                next.translate(delta.x, delta.y);
            }
            next
        })
        .collect()
}

/// Remove the selected shapes. With nothing selected the canvas is cleared.
#[must_use]
pub fn delete_selected(shapes: &[Shape]) -> Vec<Shape> {
    if !shapes.iter().any(|s| s.is_selected) {
        return Vec::new();
    }
    shapes.iter().filter(|s| !s.is_selected).cloned().collect()
}

// =============================================================================
// CLIPBOARD
// =============================================================================

/// Clone the selected shapes for the clipboard.
#[must_use]
pub fn copy_selected(shapes: &[Shape]) -> Vec<Shape> {
    shapes.iter().filter(|s| s.is_selected).cloned().collect()
}

/// Append the clipboard to `shapes` as new, selected shapes.
///
/// Pasted shapes get fresh ids and are offset by `20 * paste_count` on both
/// axes, so repeated pastes step away from the originals. Everything already
/// on the canvas is deselected.
#[must_use]
pub fn paste(shapes: &[Shape], clipboard: &[Shape], paste_count: u32) -> Vec<Shape> {
    let offset = PASTE_OFFSET * f64::from(paste_count);
    let mut out: Vec<Shape> = shapes
        .iter()
        .map(|s| {
            let mut next = s.clone();
            next.is_selected = false;
            next
        })
        .collect();
    out.extend(clipboard.iter().map(|s| {
        let mut copy = s.clone();
        copy.id = Uuid::new_v4();
        copy.is_selected = true;
        copy.translate(offset, offset);
        copy
    }));
    out
}

// =============================================================================
// TEXT
// =============================================================================

/// Proposed update after editing a text box.
///
/// `measured` is the rendered text's `(width, height)`; the box gets 20 units
/// of padding on each axis, floored at 100x24.
#[must_use]
pub fn text_edit_update(text: &str, measured: Point) -> ShapeUpdate {
    ShapeUpdate {
        width: Some((measured.x + TEXT_PADDING).max(MIN_TEXT_WIDTH)),
        height: Some((measured.y + TEXT_PADDING).max(MIN_TEXT_HEIGHT)),
        text: Some(text.to_owned()),
        ..Default::default()
    }
}

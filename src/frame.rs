//! Frames: overlap-derived membership, numbering and draw order.
//!
//! Membership is never stored. A shape belongs to the smallest frame whose
//! content area (the frame minus its title bar) covers at least
//! `FRAME_OVERLAP_RATIO` of the shape's own area, recomputed whenever asked.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::collections::{HashMap, HashSet};

use crate::consts::{FRAME_OVERLAP_RATIO, FRAME_TITLE_BAR_HEIGHT, MIN_SHAPE_SIZE};
use crate::doc::{Shape, ShapeId};
use crate::geometry::{Rect, shape_bounds};

const FRAME_NAME_PREFIX: &str = "Frame ";

/// Whether enough of `shape` overlaps the content area of `frame`.
#[must_use]
pub fn is_shape_inside_frame(shape: &Shape, frame: &Shape) -> bool {
    let mut b = shape_bounds(shape);
    b.width = b.width.max(MIN_SHAPE_SIZE);
    b.height = b.height.max(MIN_SHAPE_SIZE);

    let f = shape_bounds(frame);
    let content = Rect::new(f.x, f.y + FRAME_TITLE_BAR_HEIGHT, f.width, (f.height - FRAME_TITLE_BAR_HEIGHT).max(0.0));

    b.overlap_area(&content) >= b.area() * FRAME_OVERLAP_RATIO
}

/// The smallest frame in `shapes` that contains `shape`, ignoring the shape itself.
#[must_use]
pub fn get_containing_frame<'a>(shape: &Shape, shapes: &'a [Shape]) -> Option<&'a Shape> {
    shapes
        .iter()
        .filter(|f| f.is_frame() && f.id != shape.id)
        .filter(|f| is_shape_inside_frame(shape, f))
        .min_by(|a, b| (a.width * a.height).total_cmp(&(b.width * b.height)))
}

/// Extract `n` from a name containing `"Frame {n}"`.
#[must_use]
pub fn parse_frame_number(name: &str) -> Option<u32> {
    name.match_indices(FRAME_NAME_PREFIX).find_map(|(i, _)| {
        let rest = &name[i + FRAME_NAME_PREFIX.len()..];
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        match rest[..end].parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => None,
        }
    })
}

/// Display name for frame number `n`.
#[must_use]
pub fn frame_name(n: u32) -> String {
    format!("{FRAME_NAME_PREFIX}{n}")
}

/// One more than the highest existing frame number, or 0 when there is none.
///
/// Gaps left by deleted frames are not reused.
#[must_use]
pub fn get_next_frame_number(shapes: &[Shape]) -> u32 {
    shapes
        .iter()
        .filter_map(Shape::frame_name)
        .filter_map(parse_frame_number)
        .max()
        .map_or(0, |n| n.saturating_add(1))
}

/// Draw order: frames first, by frame number, then everything else as given.
///
/// The sort is stable, so frames with equal numbers and all non-frames keep
/// their relative order. Frames without a parseable number sort as 0.
#[must_use]
pub fn sort_shapes_by_type(shapes: &[Shape]) -> Vec<Shape> {
    let mut frames: Vec<Shape> = shapes.iter().filter(|s| s.is_frame()).cloned().collect();
    frames.sort_by_key(|f| f.frame_name().and_then(parse_frame_number).unwrap_or(0));
    frames.extend(shapes.iter().filter(|s| !s.is_frame()).cloned());
    frames
}

/// Ids of every shape that moves when the selection is dragged.
///
/// That is every selected shape, plus every shape whose containing frame
/// moves. The cascade continues through nested frames, a frame being carried
/// only by a strictly larger frame, so a chain of overlapping peer frames
/// stops at the first one.
#[must_use]
pub fn carried_shape_ids(shapes: &[Shape]) -> HashSet<ShapeId> {
    let mut moving: HashSet<ShapeId> = shapes.iter().filter(|s| s.is_selected).map(|s| s.id).collect();
    if !shapes.iter().any(|s| s.is_frame()) {
        return moving;
    }

    let parents: HashMap<ShapeId, ShapeId> = shapes
        .iter()
        .filter_map(|s| get_containing_frame(s, shapes).map(|f| (s, f)))
        .filter(|(s, f)| !s.is_frame() || s.width * s.height < f.width * f.height)
        .map(|(s, f)| (s.id, f.id))
        .collect();

    loop {
        let before = moving.len();
        for (child, parent) in &parents {
            if moving.contains(parent) {
                moving.insert(*child);
            }
        }
        if moving.len() == before {
            return moving;
        }
    }
}

//! Click and box selection.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::camera::Point;
use crate::doc::Shape;
use crate::hit::{is_shape_in_selection_box, topmost_shape_at};

/// Outcome of a click with the select tool.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    /// Whether the click grabbed a shape and a drag should follow.
    pub is_dragging: bool,
    /// The new collection, or `None` when the selection did not change.
    pub shapes: Option<Vec<Shape>>,
}

/// Resolve a click at `point` against `shapes`.
///
/// | hit | shift | result |
/// |-----|-------|--------|
/// | no  | no    | clear the selection |
/// | no  | yes   | unchanged |
/// | yes | yes   | toggle the hit shape only |
/// | yes | no    | keep a multi-selection that includes the hit shape, else select only it |
#[must_use]
pub fn resolve_selection(shapes: &[Shape], point: Point, shift_held: bool, tolerance: f64) -> SelectionResult {
    let Some(index) = topmost_shape_at(shapes, point, tolerance) else {
        let changed = !shift_held && shapes.iter().any(|s| s.is_selected);
        return SelectionResult { is_dragging: false, shapes: changed.then(|| with_selection(shapes, |_, _| false)) };
    };

    let hit_id = shapes[index].id;
    if shift_held {
        let toggled = with_selection(shapes, |s, selected| if s.id == hit_id { !selected } else { selected });
        return SelectionResult { is_dragging: true, shapes: Some(toggled) };
    }

    if shapes[index].is_selected && selected_count(shapes) >= 2 {
        return SelectionResult { is_dragging: true, shapes: None };
    }

    let only_hit = with_selection(shapes, |s, _| s.id == hit_id);
    let changed = only_hit.iter().zip(shapes).any(|(a, b)| a.is_selected != b.is_selected);
    SelectionResult { is_dragging: true, shapes: changed.then_some(only_hit) }
}

/// Select the shapes whose boxes intersect the box spanned by `start` and `end`.
///
/// With `additive`, shapes already selected stay selected; otherwise the box
/// result replaces the selection.
#[must_use]
pub fn select_in_box(shapes: &[Shape], start: Point, end: Point, additive: bool) -> Vec<Shape> {
    with_selection(shapes, |s, selected| (additive && selected) || is_shape_in_selection_box(s, start, end))
}

/// Number of selected shapes.
#[must_use]
pub fn selected_count(shapes: &[Shape]) -> usize {
    shapes.iter().filter(|s| s.is_selected).count()
}

fn with_selection(shapes: &[Shape], mut select: impl FnMut(&Shape, bool) -> bool) -> Vec<Shape> {
    shapes
        .iter()
        .map(|s| {
            let mut next = s.clone();
            next.is_selected = select(s, s.is_selected);
            next
        })
        .collect()
}

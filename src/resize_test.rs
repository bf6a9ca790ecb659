#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::ShapeStyle;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(ShapeKind::rectangle(), x, y, w, h, &ShapeStyle::default())
}

fn pencil(points: Vec<Point>, x: f64, y: f64) -> Shape {
    let b = bounding_box(&points);
    Shape::new(ShapeKind::Pencil { points }, x, y, b.width, b.height, &ShapeStyle::default())
}

/// Start a session on `shape` at `from`, drag to `to`, and apply the result.
fn drag(shape: &mut Shape, handle: ResizeHandle, from: Point, to: Point, keep: bool) -> ShapeUpdate {
    let mut engine = ResizeEngine::default();
    engine.start_resize(shape, handle, from);
    let update = engine.calculate_resize(shape, to, keep);
    shape.apply(&update);
    update
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn no_session_yields_empty_update() {
    let mut engine = ResizeEngine::default();
    let r = rect(0.0, 0.0, 100.0, 50.0);
    assert!(!engine.is_resizing());
    assert!(engine.calculate_resize(&r, pt(500.0, 500.0), false).is_empty());
}

#[test]
fn start_and_end_resize() {
    let mut engine = ResizeEngine::default();
    let r = rect(0.0, 0.0, 100.0, 50.0);
    engine.start_resize(&r, ResizeHandle::TopLeft, pt(0.0, 0.0));
    assert!(engine.is_resizing());
    assert_eq!(engine.handle(), Some(ResizeHandle::TopLeft));
    assert_eq!(engine.shape_id(), Some(r.id));
    assert_eq!(engine.start_point(), Some(pt(0.0, 0.0)));
    assert_eq!(engine.original(), Some(&r));

    engine.end_resize();
    assert!(!engine.is_resizing());
    assert!(engine.calculate_resize(&r, pt(50.0, 50.0), false).is_empty());
}

#[test]
fn sub_threshold_movement_is_ignored() {
    let mut engine = ResizeEngine::default();
    let r = rect(0.0, 0.0, 100.0, 50.0);
    engine.start_resize(&r, ResizeHandle::BottomRight, pt(100.0, 50.0));
    assert!(engine.calculate_resize(&r, pt(100.5, 50.9), false).is_empty());
}

#[test]
fn single_axis_below_threshold_counts_as_zero() {
    let mut r = rect(0.0, 0.0, 100.0, 50.0);
    drag(&mut r, ResizeHandle::BottomRight, pt(100.0, 50.0), pt(110.0, 50.5), false);
    assert_eq!((r.width, r.height), (110.0, 50.0));
}

#[test]
fn movement_is_incremental_between_steps() {
    let mut r = rect(0.0, 0.0, 100.0, 50.0);
    let mut engine = ResizeEngine::default();
    engine.start_resize(&r, ResizeHandle::BottomRight, pt(100.0, 50.0));

    let u = engine.calculate_resize(&r, pt(110.0, 55.0), false);
    r.apply(&u);
    let u = engine.calculate_resize(&r, pt(130.0, 60.0), false);
    r.apply(&u);

    assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 130.0, 60.0));
}

// =============================================================
// Box shapes
// =============================================================

#[test]
fn original_snapshot_survives_steps() {
    let mut engine = ResizeEngine::default();
    let before = rect(0.0, 0.0, 100.0, 50.0);
    let mut live = before.clone();
    engine.start_resize(&live, ResizeHandle::BottomRight, pt(100.0, 50.0));
    for to in [pt(120.0, 60.0), pt(150.0, 90.0)] {
        let update = engine.calculate_resize(&live, to, false);
        live.apply(&update);
    }
    assert_eq!((live.width, live.height), (150.0, 90.0));
    assert_eq!(engine.original(), Some(&before));
}

#[test]
fn every_box_like_kind_resizes_as_a_box() {
    let kinds = [
        ShapeKind::Circle,
        ShapeKind::Frame { name: "Frame 0".into() },
        ShapeKind::Text { text: "hi".into(), font_size: 16.0 },
    ];
    for kind in kinds {
        let mut s = Shape::new(kind, 0.0, 0.0, 100.0, 50.0, &ShapeStyle::default());
        assert!(s.shape_type().is_box_like());
        drag(&mut s, ResizeHandle::BottomRight, pt(100.0, 50.0), pt(120.0, 60.0), false);
        assert_eq!((s.x, s.y, s.width, s.height), (0.0, 0.0, 120.0, 60.0), "{:?}", s.shape_type());
    }
}

#[test]
fn bottom_right_drag_grows_box() {
    let mut r = rect(0.0, 0.0, 100.0, 50.0);
    drag(&mut r, ResizeHandle::BottomRight, pt(100.0, 50.0), pt(120.0, 60.0), false);
    assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 120.0, 60.0));
}

#[test]
fn top_left_drag_past_opposite_corner_clamps() {
    let mut r = rect(0.0, 0.0, 120.0, 60.0);
    drag(&mut r, ResizeHandle::TopLeft, pt(0.0, 0.0), pt(200.0, 200.0), false);
    assert!(r.width >= 1.0 && r.height >= 1.0);
    assert_eq!((r.width, r.height), (MIN_RESIZE_SIZE, MIN_RESIZE_SIZE));
    // The bottom-right corner stays where it was.
    assert_eq!((r.x + r.width, r.y + r.height), (120.0, 60.0));
}

#[test]
fn top_right_holds_bottom_left() {
    let mut r = rect(10.0, 10.0, 100.0, 100.0);
    drag(&mut r, ResizeHandle::TopRight, pt(110.0, 10.0), pt(130.0, -10.0), false);
    assert_eq!((r.x, r.y, r.width, r.height), (10.0, -10.0, 120.0, 120.0));
}

#[test]
fn bottom_left_holds_top_right() {
    let mut r = rect(10.0, 10.0, 100.0, 100.0);
    drag(&mut r, ResizeHandle::BottomLeft, pt(10.0, 110.0), pt(30.0, 150.0), false);
    assert_eq!((r.x, r.y, r.width, r.height), (30.0, 10.0, 80.0, 140.0));
}

#[test]
fn aspect_lock_width_dominant() {
    let mut r = rect(0.0, 0.0, 200.0, 100.0);
    drag(&mut r, ResizeHandle::BottomRight, pt(200.0, 100.0), pt(300.0, 110.0), true);
    assert_eq!((r.width, r.height), (300.0, 150.0));
}

#[test]
fn aspect_lock_height_dominant_with_top_left_anchor() {
    let mut r = rect(0.0, 0.0, 200.0, 100.0);
    drag(&mut r, ResizeHandle::TopLeft, pt(0.0, 0.0), pt(5.0, -50.0), true);
    assert_eq!((r.width, r.height), (300.0, 150.0));
    assert_eq!((r.x, r.y), (-100.0, -50.0));
}

#[test]
fn aspect_lock_floors_derived_extent() {
    let mut r = rect(0.0, 0.0, 400.0, 10.0);
    drag(&mut r, ResizeHandle::BottomRight, pt(400.0, 10.0), pt(0.0, 10.0), true);
    assert!(r.height >= MIN_SHAPE_SIZE);
    assert_eq!(r.width, MIN_RESIZE_SIZE);
}

#[test]
fn line_handles_do_not_resize_boxes() {
    let mut engine = ResizeEngine::default();
    let r = rect(0.0, 0.0, 100.0, 50.0);
    engine.start_resize(&r, ResizeHandle::End, pt(100.0, 50.0));
    assert!(engine.calculate_resize(&r, pt(200.0, 200.0), false).is_empty());
}

// =============================================================
// Lines
// =============================================================

#[test]
fn line_start_handle_keeps_end_fixed() {
    let mut l = Shape::line(pt(0.0, 0.0), pt(100.0, 100.0), &ShapeStyle::default());
    drag(&mut l, ResizeHandle::Start, pt(0.0, 0.0), pt(20.0, 50.0), true);
    assert_eq!(l.endpoints(), Some((pt(20.0, 50.0), pt(100.0, 100.0))));
    assert_eq!((l.width, l.height), (80.0, 50.0));
}

#[test]
fn line_end_handle_keeps_start_fixed() {
    let mut l = Shape::line(pt(10.0, 10.0), pt(100.0, 100.0), &ShapeStyle::default());
    drag(&mut l, ResizeHandle::End, pt(100.0, 100.0), pt(-20.0, 40.0), false);
    assert_eq!(l.endpoints(), Some((pt(10.0, 10.0), pt(-20.0, 40.0))));
    assert_eq!((l.x, l.y, l.width, l.height), (10.0, 10.0, -30.0, 30.0));
}

#[test]
fn corner_handles_do_not_resize_lines() {
    let l = Shape::line(pt(0.0, 0.0), pt(10.0, 10.0), &ShapeStyle::default());
    assert!(line_resize(&l, ResizeHandle::TopLeft, pt(50.0, 50.0)).is_empty());
}

// =============================================================
// Pencil
// =============================================================

#[test]
fn pencil_resize_changes_scale_not_points() {
    let points = vec![pt(0.0, 0.0), pt(100.0, 50.0)];
    let mut p = pencil(points.clone(), 10.0, 10.0);
    let update = drag(&mut p, ResizeHandle::BottomRight, pt(110.0, 60.0), pt(210.0, 110.0), false);

    assert_eq!(update.scale, Some(pt(2.0, 2.0)));
    assert_eq!(p.points(), Some(points.as_slice()));
    assert_eq!((p.x, p.y, p.width, p.height), (10.0, 10.0, 200.0, 100.0));
    assert_eq!(shape_bounds(&p), Rect::new(10.0, 10.0, 200.0, 100.0));
}

#[test]
fn pencil_top_left_holds_bottom_right() {
    let mut p = pencil(vec![pt(0.0, 0.0), pt(100.0, 100.0)], 0.0, 0.0);
    drag(&mut p, ResizeHandle::TopLeft, pt(0.0, 0.0), pt(50.0, 50.0), false);
    let b = shape_bounds(&p);
    assert!(approx_eq(b.right(), 100.0));
    assert!(approx_eq(b.bottom(), 100.0));
    assert!(approx_eq(b.width, 50.0));
    assert_eq!(p.scale, pt(0.5, 0.5));
}

#[test]
fn pencil_with_negative_offsets_keeps_anchor() {
    // Stroke drawn up and to the left of its origin.
    let mut p = pencil(vec![pt(0.0, 0.0), pt(-40.0, -20.0)], 100.0, 100.0);
    let before = shape_bounds(&p);
    drag(&mut p, ResizeHandle::BottomRight, pt(100.0, 100.0), pt(140.0, 120.0), false);
    let after = shape_bounds(&p);
    assert!(approx_eq(after.x, before.x));
    assert!(approx_eq(after.y, before.y));
    assert!(approx_eq(after.width, 80.0));
    assert!(approx_eq(after.height, 40.0));
}

#[test]
fn pencil_aspect_lock_scales_uniformly() {
    let mut p = pencil(vec![pt(0.0, 0.0), pt(100.0, 50.0)], 0.0, 0.0);
    drag(&mut p, ResizeHandle::BottomRight, pt(100.0, 50.0), pt(200.0, 60.0), true);
    assert!(approx_eq(p.scale.x, p.scale.y));
    assert!(approx_eq(p.width, 200.0));
    assert!(approx_eq(p.height, 100.0));
}

#[test]
fn repeated_pencil_resizes_do_not_accumulate_error() {
    let points = vec![pt(0.0, 0.0), pt(33.3, 77.7), pt(12.1, 5.5)];
    let mut p = pencil(points.clone(), 0.0, 0.0);
    let mut engine = ResizeEngine::default();
    let corner = shape_bounds(&p);
    engine.start_resize(&p, ResizeHandle::BottomRight, pt(corner.right(), corner.bottom()));
    for step in 1..=50 {
        let f = f64::from(step);
        let u = engine.calculate_resize(&p, pt(corner.right() + f * 3.0, corner.bottom() + f * 2.0), false);
        p.apply(&u);
    }
    assert_eq!(p.points(), Some(points.as_slice()));
    assert!(approx_eq(p.width, corner.width + 150.0));
    assert!(approx_eq(p.height, corner.height + 100.0));
}

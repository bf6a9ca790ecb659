//! Document model: shapes, their per-kind data, and sparse updates.
//!
//! A [`Shape`] carries the fields every kind shares (identity, box geometry,
//! style, selection) and a [`ShapeKind`] tagged union holding only the data
//! that is meaningful for that kind: raw stroke points for pencils, the two
//! endpoints for lines, the label for frames, and so on.
//!
//! Geometry is mutated through [`Shape::set_geometry`], [`Shape::translate`]
//! and [`Shape::apply`], which keep a line's endpoints and its `(x, y, width,
//! height)` box describing the same segment.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::DEFAULT_BORDER_RADIUS;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// The discriminant of a shape, without its per-kind data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
    Frame,
    Pencil,
    Line,
    Text,
}

impl ShapeType {
    /// Whether the shape is resized as an axis-aligned box.
    #[must_use]
    pub fn is_box_like(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Frame | Self::Text)
    }
}

/// Per-kind shape data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle with cosmetic rounded corners.
    Rectangle { border_radius: f64 },
    /// Circle inscribed in the box.
    Circle,
    /// Container that groups the shapes overlapping its content area.
    Frame { name: String },
    /// Freehand stroke. Points are offsets from `(x, y)` before `scale` is applied.
    Pencil { points: Vec<Point> },
    /// Straight segment; endpoints mirror `(x, y)` and `(x + width, y + height)`.
    Line { start_point: Point, end_point: Point },
    /// Text box sized from the measured text.
    Text { text: String, font_size: f64 },
}

impl ShapeKind {
    /// A rectangle with the default corner radius.
    #[must_use]
    pub fn rectangle() -> Self {
        Self::Rectangle { border_radius: DEFAULT_BORDER_RADIUS }
    }

    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Rectangle { .. } => ShapeType::Rectangle,
            Self::Circle => ShapeType::Circle,
            Self::Frame { .. } => ShapeType::Frame,
            Self::Pencil { .. } => ShapeType::Pencil,
            Self::Line { .. } => ShapeType::Line,
            Self::Text { .. } => ShapeType::Text,
        }
    }
}

/// Fill and stroke colors applied to new shapes. Colors are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill_color: String,
    pub stroke_color: String,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self { fill_color: "rgba(255, 255, 255, 0)".into(), stroke_color: "rgba(0, 0, 0, 1)".into() }
    }
}

/// A shape on the canvas.
///
/// `PartialEq` compares every field; use [`Shape::same_id`] to ask whether two
/// values are the same logical shape at different times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Unique identifier, fixed for the shape's lifetime.
    pub id: ShapeId,
    /// Reference corner x in canvas space (top-left, or origin for lines and pencils).
    pub x: f64,
    /// Reference corner y in canvas space.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Reserved; always 0 on the paths this crate handles.
    pub rotation: f64,
    /// Multiplier applied to pencil points.
    pub scale: Point,
    pub fill_color: String,
    pub stroke_color: String,
    pub is_selected: bool,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

impl Shape {
    /// Build an unselected, unrotated, unscaled shape with a fresh id.
    ///
    /// Line endpoints are derived from the box, whatever the `kind` carried.
    #[must_use]
    pub fn new(kind: ShapeKind, x: f64, y: f64, width: f64, height: f64, style: &ShapeStyle) -> Self {
        let mut shape = Self {
            id: Uuid::new_v4(),
            x,
            y,
            width,
            height,
            rotation: 0.0,
            scale: Point::new(1.0, 1.0),
            fill_color: style.fill_color.clone(),
            stroke_color: style.stroke_color.clone(),
            is_selected: false,
            kind,
        };
        shape.sync_line_endpoints();
        shape
    }

    /// Build a line from `start` to `end`.
    #[must_use]
    pub fn line(start: Point, end: Point, style: &ShapeStyle) -> Self {
        let kind = ShapeKind::Line { start_point: start, end_point: end };
        Self::new(kind, start.x, start.y, end.x - start.x, end.y - start.y, style)
    }

    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    #[must_use]
    pub fn is_frame(&self) -> bool {
        matches!(self.kind, ShapeKind::Frame { .. })
    }

    /// Whether both values describe the same logical shape.
    #[must_use]
    pub fn same_id(&self, other: &Shape) -> bool {
        self.id == other.id
    }

    /// Display label for frames; `None` for every other kind.
    #[must_use]
    pub fn frame_name(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Frame { name } => Some(name),
            _ => None,
        }
    }

    /// Raw (pre-scale) pencil offsets; `None` for every other kind.
    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match &self.kind {
            ShapeKind::Pencil { points } => Some(points),
            _ => None,
        }
    }

    /// Line endpoints; `None` for every other kind.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self.kind {
            ShapeKind::Line { start_point, end_point } => Some((start_point, end_point)),
            _ => None,
        }
    }

    /// Replace the box geometry.
    pub fn set_geometry(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self.sync_line_endpoints();
    }

    /// Move the shape by `(dx, dy)`. Pencil points are relative and stay untouched.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.sync_line_endpoints();
    }

    /// Apply a sparse update. Fields that do not fit the shape's kind are ignored.
    pub fn apply(&mut self, update: &ShapeUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(w) = update.width {
            self.width = w;
        }
        if let Some(h) = update.height {
            self.height = h;
        }
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        if let ShapeKind::Text { text, font_size } = &mut self.kind {
            if let Some(t) = &update.text {
                text.clone_from(t);
            }
            if let Some(fs) = update.font_size {
                *font_size = fs;
            }
        }
        self.sync_line_endpoints();
    }

    fn sync_line_endpoints(&mut self) {
        if let ShapeKind::Line { start_point, end_point } = &mut self.kind {
            *start_point = Point::new(self.x, self.y);
            *end_point = Point::new(self.x + self.width, self.y + self.height);
        }
    }
}

/// Sparse update for a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scale: Option<Point>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
}

impl ShapeUpdate {
    /// An update that replaces the whole box.
    #[must_use]
    pub fn geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x: Some(x), y: Some(y), width: Some(width), height: Some(height), ..Default::default() }
    }

    /// Returns `true` if applying this update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

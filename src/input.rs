//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up, carrying the context needed to rebuild the preview on every
//! move and to commit a single history entry on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{Shape, ShapeId, ShapeStyle, ShapeType};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Draw a rectangle.
    Rectangle,
    /// Draw a circle.
    Circle,
    /// Draw a frame.
    Frame,
    /// Draw a freehand stroke.
    Pencil,
    /// Draw a straight line segment.
    Line,
    /// Create a text box.
    Text,
}

impl Tool {
    /// The kind of shape this tool creates; `None` for [`Tool::Select`].
    #[must_use]
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            Self::Select => None,
            Self::Rectangle => Some(ShapeType::Rectangle),
            Self::Circle => Some(ShapeType::Circle),
            Self::Frame => Some(ShapeType::Frame),
            Self::Pencil => Some(ShapeType::Pencil),
            Self::Line => Some(ShapeType::Line),
            Self::Text => Some(ShapeType::Text),
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button; drags pan the canvas.
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host (e.g. `"Delete"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active drawing tool.
    pub tool: Tool,
    /// Keep the drawing tool after a shape is finished instead of returning to select.
    pub tool_locked: bool,
    /// Colors applied to newly created shapes.
    pub style: ShapeStyle,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the canvas with a middle-button drag.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is moving the selection (and whatever its frames carry).
    DraggingSelection {
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// The collection at pointer-down; every move is computed from it.
        base: Vec<Shape>,
    },
    /// The user is rubber-banding a selection box over empty canvas.
    SelectingBox {
        /// World-space corner where the drag started.
        start_world: Point,
        /// World-space corner under the pointer.
        current_world: Point,
        /// Add to the existing selection instead of replacing it.
        additive: bool,
    },
    /// The user is sizing a new box-like shape or line by dragging.
    DrawingShape {
        /// Kind of shape being drawn.
        shape_type: ShapeType,
        /// World-space point where the drag started.
        anchor_world: Point,
        /// Whether the pointer has moved since pointer-down.
        moved: bool,
    },
    /// The user is drawing a freehand stroke.
    DrawingStroke {
        /// Id of the stroke in the working collection.
        id: ShapeId,
    },
    /// The user is dragging a resize handle; the session lives in the resize engine.
    Resizing {
        /// Id of the shape being resized.
        id: ShapeId,
    },
}

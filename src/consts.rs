//! Shared numeric constants for the canvas engine.

// ── Hit-testing ─────────────────────────────────────────────────

/// Default slop in canvas units for point-in-shape tests.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Width of the clickable border band of a frame, in canvas units.
pub const FRAME_BORDER_HIT_WIDTH: f64 = 10.0;

/// Screen-space hit radius in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Resize ──────────────────────────────────────────────────────

/// Smallest extent a handle drag may produce before the post-resize floor.
pub const MIN_RESIZE_SIZE: f64 = 10.0;

/// Absolute floor for `width`/`height` of box-like shapes after any mutation.
pub const MIN_SHAPE_SIZE: f64 = 1.0;

/// Per-axis pointer movement below which a resize step is suppressed.
pub const MOVEMENT_THRESHOLD: f64 = 1.0;

// ── Frames ──────────────────────────────────────────────────────

/// Height of a frame's title bar; excluded from its content area.
pub const FRAME_TITLE_BAR_HEIGHT: f64 = 32.0;

/// Minimum share of a shape's area that must overlap a frame's content area.
pub const FRAME_OVERLAP_RATIO: f64 = 0.10;

// ── Creation ────────────────────────────────────────────────────

/// Size of a generic shape created by a click without drag.
pub const DEFAULT_SHAPE_SIZE: f64 = 80.0;

/// Width of a frame created by a click without drag.
pub const DEFAULT_FRAME_WIDTH: f64 = 1200.0;

/// Height of a frame created by a click without drag.
pub const DEFAULT_FRAME_HEIGHT: f64 = 720.0;

/// Initial text box width.
pub const DEFAULT_TEXT_WIDTH: f64 = 200.0;

/// Initial text box height.
pub const DEFAULT_TEXT_HEIGHT: f64 = 50.0;

/// Initial text font size.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Padding added around measured text when sizing a text box.
pub const TEXT_PADDING: f64 = 20.0;

/// Minimum text box width after an edit.
pub const MIN_TEXT_WIDTH: f64 = 100.0;

/// Minimum text box height after an edit.
pub const MIN_TEXT_HEIGHT: f64 = 24.0;

/// Corner radius given to new rectangles.
pub const DEFAULT_BORDER_RADIUS: f64 = 8.0;

/// Offset applied to pasted shapes so they do not cover the originals.
pub const PASTE_OFFSET: f64 = 20.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of history entries retained.
pub const MAX_HISTORY_LENGTH: usize = 50;

/// Maximum number of listener follow-up rounds a single push may trigger.
pub const MAX_CASCADE_DEPTH: usize = 8;

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom change per wheel delta unit.
pub const ZOOM_SPEED: f64 = 0.005;

/// Pan distance per wheel delta unit.
pub const WHEEL_PAN_SPEED: f64 = 0.5;

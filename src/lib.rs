//! Shape geometry and manipulation engine for an infinite sketching canvas.
//!
//! The crate holds everything between raw pointer input and the rendered
//! scene: the shape model, canvas-space hit-testing, handle-driven resizing,
//! frame containment, selection, and a bounded undo/redo history whose
//! current snapshot is the source of truth. Rendering and text measurement
//! belong to the host, which feeds pointer, wheel and key events into
//! [`engine::EngineCore`] and draws [`engine::EngineCore::render_order`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`] event entry points and gesture previews |
//! | [`doc`] | Shape model, per-kind data and sparse updates |
//! | [`camera`] | Points, pan/zoom camera and coordinate conversions |
//! | [`geometry`] | Boxes, point-set bounds, segment distance |
//! | [`hit`] | Hit-testing shapes and resize handles |
//! | [`resize`] | Resize sessions and per-kind resize math |
//! | [`frame`] | Frame containment, numbering and draw order |
//! | [`selection`] | Click and box selection |
//! | [`edit`] | Creation, moves, strokes, delete, clipboard, text edits |
//! | [`history`] | Bounded undo/redo snapshot store |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`config`] | Environment-driven engine tuning |
//! | [`consts`] | Shared numeric constants (tolerances, minimum sizes, defaults) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod edit;
pub mod engine;
pub mod frame;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod resize;
pub mod selection;

//! Pointer, wheel and key entry points over the history-backed shape collection.
//!
//! Gestures edit a working copy of the current snapshot so the host can render
//! a live preview; pointer-up commits the working copy as one history entry
//! (skipped when it equals the current snapshot) and
//! [`EngineCore::cancel_gesture`] throws it away.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::mem;

use crate::camera::{Camera, Point};
use crate::config::EngineConfig;
use crate::doc::{Shape, ShapeId, ShapeStyle, ShapeType, ShapeUpdate};
use crate::edit::{
    begin_stroke, copy_selected, create_shape, default_click_end, delete_selected, extend_stroke, paste,
    text_edit_update, update_shape_position,
};
use crate::frame::sort_shapes_by_type;
use crate::history::HistoryStore;
use crate::hit::{HitPart, hit_test};
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState, WheelDelta};
use crate::resize::ResizeEngine;
use crate::selection::{resolve_selection, select_in_box};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// A text box was created and should be opened in the host's editor.
    EditTextRequested { id: ShapeId },
    /// A shape was changed outside a pointer gesture.
    ShapeUpdated { id: ShapeId, update: ShapeUpdate },
    /// The active tool changed without a `set_tool` call.
    ToolChanged(Tool),
    RenderNeeded,
}

/// Engine state: history, camera, tool state and the in-flight gesture.
#[derive(Debug)]
pub struct EngineCore {
    pub history: HistoryStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: EngineConfig,
    resize: ResizeEngine,
    working: Option<Vec<Shape>>,
    clipboard: Vec<Shape>,
    paste_count: u32,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            history: HistoryStore::new(config.history_limit),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            resize: ResizeEngine::new(config.min_resize_size, config.movement_threshold),
            config,
            working: None,
            clipboard: Vec::new(),
            paste_count: 0,
        }
    }

    // --- Tool / style ---

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Keep the active drawing tool after each shape instead of returning to select.
    pub fn set_tool_locked(&mut self, locked: bool) {
        self.ui.tool_locked = locked;
    }

    /// Colors for shapes created from now on.
    pub fn set_style(&mut self, style: ShapeStyle) {
        self.ui.style = style;
    }

    // --- Queries ---

    /// The shapes to show: the gesture preview if one is active, else the current snapshot.
    #[must_use]
    pub fn shapes(&self) -> Vec<Shape> {
        match &self.working {
            Some(working) => working.clone(),
            None => self.history.current(),
        }
    }

    /// [`EngineCore::shapes`] in draw order, frames underneath.
    #[must_use]
    pub fn render_order(&self) -> Vec<Shape> {
        sort_shapes_by_type(&self.shapes())
    }

    /// Ids of the selected shapes.
    #[must_use]
    pub fn selection(&self) -> Vec<ShapeId> {
        self.shapes().iter().filter(|s| s.is_selected).map(|s| s.id).collect()
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<Shape> {
        self.shapes().into_iter().find(|s| s.id == id)
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Whether a resize session is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        match button {
            Button::Middle => {
                self.cancel_gesture();
                self.input = InputState::Panning { last_screen: screen_pt };
                return Vec::new();
            }
            Button::Secondary => return Vec::new(),
            Button::Primary => {}
        }
        // A press while a gesture is still open means its release was lost.
        self.cancel_gesture();

        let world = self.camera.screen_to_world(screen_pt);
        match self.ui.tool.shape_type() {
            None => self.select_down(world, modifiers),
            Some(ShapeType::Text) => self.create_text(world),
            Some(ShapeType::Pencil) => {
                let stroke = begin_stroke(world, &self.ui.style);
                let id = stroke.id;
                let mut working = self.history.current();
                working.push(stroke);
                self.working = Some(working);
                self.input = InputState::DrawingStroke { id };
                tracing::debug!(%id, "stroke started");
                vec![Action::RenderNeeded]
            }
            Some(shape_type) => {
                self.input = InputState::DrawingShape { shape_type, anchor_world: world, moved: false };
                Vec::new()
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match &mut self.input {
            InputState::Idle => return Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_x += screen_pt.x - last_screen.x;
                self.camera.pan_y += screen_pt.y - last_screen.y;
                *last_screen = screen_pt;
            }
            InputState::DraggingSelection { start_world, base } => {
                self.working = Some(update_shape_position(base, *start_world, world));
            }
            InputState::SelectingBox { start_world, current_world, additive } => {
                *current_world = world;
                self.working = Some(select_in_box(&self.history.current(), *start_world, world, *additive));
            }
            InputState::DrawingShape { shape_type, anchor_world, moved } => {
                *moved = true;
                let mut working = self.history.current();
                if let Some(shape) = create_shape(*shape_type, *anchor_world, world, &self.ui.style, &working) {
                    working.push(shape);
                }
                self.working = Some(working);
            }
            InputState::DrawingStroke { id } => {
                let id = *id;
                if let Some(stroke) = self.working_shape_mut(id) {
                    extend_stroke(stroke, world);
                }
            }
            InputState::Resizing { id } => {
                let id = *id;
                let Some(current) = self.working_shape(id).cloned() else {
                    return Vec::new();
                };
                let update = self.resize.calculate_resize(&current, world, modifiers.shift);
                if update.is_empty() {
                    return Vec::new();
                }
                if let Some(shape) = self.working_shape_mut(id) {
                    shape.apply(&update);
                }
            }
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button == Button::Secondary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        let mut actions = Vec::new();

        match mem::take(&mut self.input) {
            InputState::Idle | InputState::Panning { .. } => return actions,
            InputState::DraggingSelection { .. } | InputState::SelectingBox { .. } => self.commit_working(),
            InputState::DrawingShape { shape_type, anchor_world, moved } => {
                self.working = None;
                let end = if moved { world } else { default_click_end(shape_type, anchor_world) };
                let mut shapes = self.history.current();
                if let Some(shape) = create_shape(shape_type, anchor_world, end, &self.ui.style, &shapes) {
                    tracing::debug!(id = %shape.id, ?shape_type, "shape created");
                    shapes.push(shape);
                    self.history.push(&shapes);
                }
                self.finish_tool(&mut actions);
            }
            InputState::DrawingStroke { id } => {
                tracing::debug!(%id, "stroke finished");
                self.commit_working();
                self.finish_tool(&mut actions);
            }
            InputState::Resizing { .. } => {
                self.resize.end_resize();
                self.commit_working();
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Abandon the in-flight gesture, dropping its preview and any resize session.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        let was_active = !matches!(self.input, InputState::Idle) || self.working.is_some();
        self.input = InputState::Idle;
        self.working = None;
        self.resize.end_resize();
        if was_active {
            tracing::debug!("gesture cancelled");
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Wheel / keys ---

    /// Pan with a plain wheel; zoom around the pointer with ctrl or meta held.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.command() {
            self.camera.zoom_at(screen_pt, delta.dy);
        } else {
            self.camera.pan_by_wheel(delta.dx, delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let changed = match key.0.as_str() {
            "Escape" => return self.cancel_gesture(),
            "Delete" | "Backspace" => self.delete(),
            "z" | "Z" if modifiers.command() && modifiers.shift => self.redo(),
            "z" | "Z" if modifiers.command() => self.undo(),
            "y" | "Y" if modifiers.command() => self.redo(),
            "c" | "C" if modifiers.command() => {
                self.copy();
                false
            }
            "v" | "V" if modifiers.command() => self.paste(),
            _ => false,
        };
        if changed { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Commands ---

    /// Delete the selected shapes, or everything when nothing is selected.
    pub fn delete(&mut self) -> bool {
        if !matches!(self.input, InputState::Idle) {
            return false;
        }
        let shapes = self.history.current();
        if shapes.is_empty() {
            return false;
        }
        self.history.push(&delete_selected(&shapes));
        true
    }

    /// Step back one history entry, abandoning any gesture.
    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        self.history.undo()
    }

    /// Step forward one history entry, abandoning any gesture.
    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        self.history.redo()
    }

    /// Copy the selected shapes to the clipboard. With nothing selected the
    /// clipboard is left as it was.
    pub fn copy(&mut self) {
        let copied = copy_selected(&self.history.current());
        if copied.is_empty() {
            return;
        }
        self.clipboard = copied;
        self.paste_count = 0;
    }

    /// Paste the clipboard, each paste stepping further from the originals.
    pub fn paste(&mut self) -> bool {
        if self.clipboard.is_empty() || !matches!(self.input, InputState::Idle) {
            return false;
        }
        self.paste_count = self.paste_count.saturating_add(1);
        let shapes = paste(&self.history.current(), &self.clipboard, self.paste_count);
        self.history.push(&shapes);
        true
    }

    /// Commit edited text back into a text box, resizing it to the measured text.
    pub fn set_text(&mut self, id: ShapeId, text: &str, measured: Point) -> Action {
        let mut shapes = self.history.current();
        let Some(shape) = shapes.iter_mut().find(|s| s.id == id) else {
            return Action::None;
        };
        let update = text_edit_update(text, measured);
        shape.apply(&update);
        self.history.push(&shapes);
        Action::ShapeUpdated { id, update }
    }

    // --- Internals ---

    fn select_down(&mut self, world: Point, modifiers: Modifiers) -> Vec<Action> {
        let shapes = self.history.current();
        let tolerance = self.config.hit_tolerance;
        let handle_radius = self.camera.screen_dist_to_world(self.config.handle_radius_px);

        if let Some(hit) = hit_test(&shapes, world, tolerance, handle_radius)
            && let HitPart::Handle(handle) = hit.part
            && let Some(shape) = shapes.iter().find(|s| s.id == hit.shape_id)
        {
            self.resize.start_resize(shape, handle, world);
            self.input = InputState::Resizing { id: hit.shape_id };
            self.working = Some(shapes);
            return Vec::new();
        }

        let result = resolve_selection(&shapes, world, modifiers.shift, tolerance);
        let base = result.shapes.unwrap_or(shapes);
        self.input = if result.is_dragging {
            InputState::DraggingSelection { start_world: world, base: base.clone() }
        } else {
            InputState::SelectingBox { start_world: world, current_world: world, additive: modifiers.shift }
        };
        self.working = Some(base);
        vec![Action::RenderNeeded]
    }

    fn create_text(&mut self, world: Point) -> Vec<Action> {
        let mut shapes = self.history.current();
        let end = default_click_end(ShapeType::Text, world);
        let Some(text) = create_shape(ShapeType::Text, world, end, &self.ui.style, &shapes) else {
            return Vec::new();
        };
        let id = text.id;
        shapes.push(text);
        self.history.push(&shapes);

        let mut actions = vec![Action::EditTextRequested { id }];
        self.finish_tool(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn working_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.working.as_ref()?.iter().find(|s| s.id == id)
    }

    fn working_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.working.as_mut()?.iter_mut().find(|s| s.id == id)
    }

    fn commit_working(&mut self) {
        if let Some(working) = self.working.take()
            && working != self.history.current()
        {
            self.history.push(&working);
        }
    }

    fn finish_tool(&mut self, actions: &mut Vec<Action>) {
        if !self.ui.tool_locked && self.ui.tool != Tool::Select {
            self.ui.tool = Tool::Select;
            actions.push(Action::ToolChanged(Tool::Select));
        }
    }
}

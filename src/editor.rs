//! The shape editor: an ordered list of placed shapes and the interaction
//! mode that decides what a click on the canvas does.
//!
//! # Modes
//!
//! ```text
//!            toggle(Select)            toggle(Delete)
//!   ┌──────┐ ─────────────► ┌────────┐ ─────────────► ┌────────┐
//!   │ Draw │                │ Select │                │ Delete │
//!   └──────┘ ◄───────────── └────────┘ ◄───────────── └────────┘
//!      ▲      toggle(Select)     toggle(Delete)            │
//!      └───────────────────────────────────────────────────┘
//!                        toggle(Delete)
//! ```
//!
//! Toggling the mode that is already active returns to `Draw`. Clicks never
//! change the mode.
//!
//! # Z-order
//!
//! `shapes` is painted in order, bottom first, so the last entry is the
//! topmost shape. Selecting a shape moves it to the end, which makes it both
//! the visible top and the shape a delete click removes.

use egui::{Pos2, Vec2};

use crate::error::{EditorError, EditorResult};
use crate::geometry::hit_testing;
use crate::renderer::RenderSurface;
use crate::shape::{Shape, ShapeId, ShapeKind, ShapeParams};
use crate::tools::ToolSettings;

/// What a click on the canvas does
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Place a new shape with the pending tool
    #[default]
    Draw,
    /// Pick the topmost shape under the cursor
    Select,
    /// Remove the topmost shape under the cursor
    Delete,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Select => "Select",
            Mode::Delete => "Delete",
        }
    }
}

/// Result of a single canvas click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Placed(ShapeId),
    Selected(ShapeId),
    Deleted(ShapeId),
    /// Nothing changed: no tool chosen, or nothing under the cursor
    Ignored,
}

#[derive(Debug, Default)]
pub struct Editor {
    shapes: Vec<Shape>,
    mode: Mode,
    pending_tool: Option<ShapeKind>,
    // Invariant: when set, names the last entry of `shapes`
    selected: Option<ShapeId>,
    canvas_size: Vec2,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes from bottom to top
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending_tool(&self) -> Option<ShapeKind> {
        self.pending_tool
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        let id = self.selected?;
        self.shapes.last().filter(|shape| shape.id() == id)
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Remember the tool used by the next draw click. The mode is untouched.
    pub fn choose_tool(&mut self, kind: ShapeKind) {
        log::info!("Tool chosen: {}", kind);
        self.pending_tool = Some(kind);
    }

    /// Choose a tool by its button id. Unknown ids leave no tool chosen.
    pub fn choose_tool_by_id(&mut self, id: &str) {
        match ShapeKind::from_id(id) {
            Some(kind) => self.choose_tool(kind),
            None => {
                log::warn!("Unknown shape tool {:?}, draw clicks will be ignored", id);
                self.pending_tool = None;
            }
        }
    }

    pub fn clear_tool(&mut self) {
        self.pending_tool = None;
    }

    /// Switch to `target`, or back to `Draw` if `target` is already active
    pub fn toggle_mode(&mut self, target: Mode) {
        let old = self.mode;
        self.mode = if self.mode == target { Mode::Draw } else { target };
        log::info!("Mode changed: {:?} -> {:?}", old, self.mode);
    }

    /// Interpret a click at a canvas-local point according to the current
    /// mode, then redraw the canvas.
    pub fn handle_click(
        &mut self,
        pos: Pos2,
        tool: &ToolSettings,
        surface: &mut dyn RenderSurface,
    ) -> ClickOutcome {
        let outcome = match self.mode {
            Mode::Draw => self.place_shape(pos, tool),
            Mode::Select => self.select_at(pos, &*surface),
            Mode::Delete => self.delete_at(pos, &*surface),
        };
        log::debug!("Click at {:?} in {:?} mode: {:?}", pos, self.mode, outcome);

        if let Err(err) = self.render(surface) {
            log::error!("Redraw after click failed: {}", err);
        }
        outcome
    }

    /// Place a shape of the pending kind centered at `pos`
    pub fn place_shape(&mut self, pos: Pos2, tool: &ToolSettings) -> ClickOutcome {
        let Some(kind) = self.pending_tool else {
            return ClickOutcome::Ignored;
        };

        let shape = Shape::new(
            kind,
            ShapeParams {
                color: tool.color,
                position: pos,
                width: tool.width,
                height: tool.height,
            },
        );
        let id = shape.id();
        self.shapes.push(shape);
        self.selected = None;
        ClickOutcome::Placed(id)
    }

    /// Select the topmost shape under `pos` and promote it to the top.
    ///
    /// Any previous selection is dropped first, so a miss leaves nothing
    /// selected and the order unchanged.
    pub fn select_at(&mut self, pos: Pos2, surface: &dyn RenderSurface) -> ClickOutcome {
        self.selected = None;

        let Some(index) =
            hit_testing::topmost_hit(&self.shapes, |shape| surface.contains_point(shape.outline(), pos))
        else {
            return ClickOutcome::Ignored;
        };

        let shape = self.shapes.remove(index);
        let id = shape.id();
        self.shapes.push(shape);
        self.selected = Some(id);
        ClickOutcome::Selected(id)
    }

    /// Select the topmost shape under `pos`, then remove it
    pub fn delete_at(&mut self, pos: Pos2, surface: &dyn RenderSurface) -> ClickOutcome {
        let ClickOutcome::Selected(id) = self.select_at(pos, surface) else {
            return ClickOutcome::Ignored;
        };

        // Selection promoted the shape to the end
        self.shapes.pop();
        self.selected = None;
        log::info!("Deleted shape {}", id);
        ClickOutcome::Deleted(id)
    }

    /// Remove every shape, whatever the mode
    pub fn clear(&mut self, surface: &mut dyn RenderSurface) {
        log::info!("Clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        self.selected = None;

        if let Err(err) = self.render(surface) {
            log::error!("Redraw after clear failed: {}", err);
        }
    }

    /// Store new canvas dimensions and redraw
    pub fn resize(&mut self, size: Vec2, surface: &mut dyn RenderSurface) {
        log::debug!("Canvas resized: {:?} -> {:?}", self.canvas_size, size);
        self.canvas_size = size;

        if let Err(err) = self.render(surface) {
            log::error!("Redraw after resize failed: {}", err);
        }
    }

    /// Paint the background, then every shape from bottom to top
    pub fn render(&self, surface: &mut dyn RenderSurface) -> EditorResult<()> {
        if !surface.is_valid() {
            log::error!("Cannot render: surface has no valid drawing context");
            return Err(EditorError::InvalidSurface);
        }

        surface.clear_and_fill_background();
        for shape in &self.shapes {
            surface.fill_path(shape.outline(), shape.color());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let editor = Editor::default();
        assert_eq!(editor.mode(), Mode::Draw);
        assert!(editor.is_empty());
        assert_eq!(editor.pending_tool(), None);
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_toggle_same_mode_returns_to_draw() {
        let mut editor = Editor::default();
        editor.toggle_mode(Mode::Select);
        assert_eq!(editor.mode(), Mode::Select);
        editor.toggle_mode(Mode::Select);
        assert_eq!(editor.mode(), Mode::Draw);
    }

    #[test]
    fn test_last_toggle_wins() {
        let mut editor = Editor::default();
        editor.toggle_mode(Mode::Select);
        editor.toggle_mode(Mode::Delete);
        assert_eq!(editor.mode(), Mode::Delete);
        editor.toggle_mode(Mode::Delete);
        assert_eq!(editor.mode(), Mode::Draw);
    }

    #[test]
    fn test_toggle_draw_stays_in_draw() {
        let mut editor = Editor::default();
        editor.toggle_mode(Mode::Draw);
        assert_eq!(editor.mode(), Mode::Draw);
    }

    #[test]
    fn test_choose_tool_keeps_mode() {
        let mut editor = Editor::default();
        editor.toggle_mode(Mode::Select);
        editor.choose_tool(ShapeKind::Circle);
        assert_eq!(editor.mode(), Mode::Select);
        assert_eq!(editor.pending_tool(), Some(ShapeKind::Circle));
    }

    #[test]
    fn test_choose_unknown_tool_clears_pending() {
        let mut editor = Editor::default();
        editor.choose_tool_by_id("triangle");
        assert_eq!(editor.pending_tool(), Some(ShapeKind::Triangle));
        editor.choose_tool_by_id("star");
        assert_eq!(editor.pending_tool(), None);
    }

    #[test]
    fn test_place_without_tool_is_ignored() {
        let mut editor = Editor::default();
        let outcome = editor.place_shape(Pos2::new(10.0, 10.0), &ToolSettings::default());
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(editor.is_empty());
    }
}

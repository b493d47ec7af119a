use egui::{Pos2, Rect, Vec2};

/// Represents the location where a click occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas origin
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Translate a screen position into canvas-local coordinates
pub fn to_canvas_local(screen_pos: Pos2, canvas_rect: Rect) -> Pos2 {
    (screen_pos - canvas_rect.min).to_pos2()
}

/// Maps pointer positions onto the canvas
#[derive(Debug, Clone, Copy)]
pub struct CanvasInput {
    canvas_rect: Rect,
}

impl Default for CanvasInput {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl CanvasInput {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_rect.size()
    }

    /// Creates an InputLocation from a screen position
    pub fn make_location(&self, screen_pos: Pos2) -> InputLocation {
        InputLocation {
            position: to_canvas_local(screen_pos, self.canvas_rect),
            is_in_canvas: self.canvas_rect.contains(screen_pos),
        }
    }

    /// Canvas-local position of the primary click this frame, if it landed on the canvas
    pub fn click_location(&self, response: &egui::Response) -> Option<InputLocation> {
        if !response.clicked() {
            return None;
        }
        let location = self.make_location(response.interact_pointer_pos()?);
        location.is_in_canvas.then_some(location)
    }
}

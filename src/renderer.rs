// src/renderer.rs
use egui::{Color32, Pos2, Rect};

use crate::geometry::Outline;

/// The drawing surface the editor paints onto.
///
/// All coordinates are canvas-local. The editor only ever clears the surface,
/// fills outlines and asks whether a point is inside an outline.
pub trait RenderSurface {
    /// Whether the surface has a usable drawing context
    fn is_valid(&self) -> bool {
        true
    }

    /// Wipe the whole canvas with the background color
    fn clear_and_fill_background(&mut self);

    /// Fill `outline` with `color`
    fn fill_path(&mut self, outline: &Outline, color: Color32);

    /// Test if the canvas-local point lies inside `outline`
    fn contains_point(&self, outline: &Outline, pos: Pos2) -> bool {
        outline.contains(pos)
    }
}

/// Renders onto an egui painter clipped to the canvas rectangle
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    canvas_rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface covering `canvas_rect` in screen space
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     canvas_rect (egui::Rect): Where the canvas sits on screen
    ///     background (Color32): Fill used when the canvas is cleared
    pub fn new(painter: &'a egui::Painter, canvas_rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            canvas_rect,
            background,
        }
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn to_screen(&self, outline: &Outline) -> Outline {
        outline.translate(self.canvas_rect.min.to_vec2())
    }
}

impl RenderSurface for PainterSurface<'_> {
    fn is_valid(&self) -> bool {
        self.canvas_rect.is_finite() && self.canvas_rect.is_positive()
    }

    fn clear_and_fill_background(&mut self) {
        self.painter.rect_filled(self.canvas_rect, 0.0, self.background);
    }

    fn fill_path(&mut self, outline: &Outline, color: Color32) {
        // Shapes hanging over the canvas edge are cut off like on a real canvas
        let painter = self.painter.with_clip_rect(self.canvas_rect);
        match self.to_screen(outline) {
            Outline::Rect(rect) => {
                painter.rect_filled(rect, 0.0, color);
            }
            Outline::Circle { center, radius } => {
                painter.circle_filled(center, radius, color);
            }
            Outline::Triangle(points) => {
                painter.add(egui::Shape::convex_polygon(
                    points.to_vec(),
                    color,
                    egui::Stroke::NONE,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;
    use egui::{pos2, vec2};

    fn test_painter(rect: Rect) -> egui::Painter {
        let ctx = egui::Context::default();
        egui::Painter::new(ctx, egui::LayerId::background(), rect)
    }

    #[test]
    fn test_surface_validity() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(100.0, 100.0));
        let painter = test_painter(rect);
        assert!(PainterSurface::new(&painter, rect, Color32::WHITE).is_valid());

        let empty = Rect::from_min_size(pos2(10.0, 10.0), vec2(0.0, 0.0));
        assert!(!PainterSurface::new(&painter, empty, Color32::WHITE).is_valid());
    }

    #[test]
    fn test_containment_is_canvas_local() {
        let rect = Rect::from_min_size(pos2(100.0, 100.0), vec2(200.0, 200.0));
        let painter = test_painter(rect);
        let surface = PainterSurface::new(&painter, rect, Color32::WHITE);

        let outline = Outline::new(ShapeKind::Rectangle, pos2(10.0, 10.0), vec2(10.0, 10.0));
        assert!(surface.contains_point(&outline, pos2(10.0, 10.0)));
        assert!(!surface.contains_point(&outline, pos2(110.0, 110.0)));
    }

    #[test]
    fn test_fill_every_kind() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = test_painter(rect);
        let mut surface = PainterSurface::new(&painter, rect, Color32::WHITE);

        surface.clear_and_fill_background();
        for kind in ShapeKind::ALL {
            let outline = Outline::new(kind, pos2(50.0, 50.0), vec2(20.0, 20.0));
            surface.fill_path(&outline, Color32::RED);
        }
    }
}

use egui::{Pos2, Rect, Vec2, pos2};

use super::hit_testing;
use crate::shape::ShapeKind;

/// The derived boundary of a shape.
///
/// Used both to fill the shape and to decide whether a point lies inside it.
/// Always a pure function of kind, center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    /// Axis-aligned box
    Rect(Rect),
    /// Full circle
    Circle { center: Pos2, radius: f32 },
    /// Apex, bottom-left corner, bottom-right corner
    Triangle([Pos2; 3]),
}

impl Outline {
    /// Build the outline for a shape of `kind` centered at `center`
    pub fn new(kind: ShapeKind, center: Pos2, size: Vec2) -> Self {
        let half = size / 2.0;
        match kind {
            ShapeKind::Rectangle => Outline::Rect(Rect::from_center_size(center, size)),
            // Circles only look at the width
            ShapeKind::Circle => Outline::Circle {
                center,
                radius: half.x,
            },
            ShapeKind::Triangle => Outline::Triangle([
                pos2(center.x, center.y - half.y),
                pos2(center.x - half.x, center.y + half.y),
                pos2(center.x + half.x, center.y + half.y),
            ]),
        }
    }

    /// Test if `pos` lies inside the outline (edges included)
    pub fn contains(&self, pos: Pos2) -> bool {
        match *self {
            Outline::Rect(rect) => hit_testing::point_in_rect(pos, rect),
            Outline::Circle { center, radius } => hit_testing::point_in_circle(pos, center, radius),
            Outline::Triangle(points) => hit_testing::point_in_triangle(pos, points),
        }
    }

    /// Smallest axis-aligned rectangle enclosing the outline
    pub fn bounding_rect(&self) -> Rect {
        match *self {
            Outline::Rect(rect) => rect,
            Outline::Circle { center, radius } => {
                Rect::from_center_size(center, Vec2::splat(radius * 2.0))
            }
            Outline::Triangle(points) => Rect::from_points(&points),
        }
    }

    /// Same outline shifted by `delta`, used to move from canvas to screen space
    pub fn translate(&self, delta: Vec2) -> Self {
        match *self {
            Outline::Rect(rect) => Outline::Rect(rect.translate(delta)),
            Outline::Circle { center, radius } => Outline::Circle {
                center: center + delta,
                radius,
            },
            Outline::Triangle(points) => Outline::Triangle(points.map(|p| p + delta)),
        }
    }
}

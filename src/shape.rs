use egui::{Color32, Pos2, Vec2, vec2};
use uuid::Uuid;

use crate::error::{EditorError, EditorResult};
use crate::geometry::Outline;

/// Width used when the caller does not pick one
pub const DEFAULT_SHAPE_WIDTH: f32 = 100.0;

/// The kinds of shape the editor can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    /// All kinds, in toolbar order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];

    /// Stable identifier used by tool buttons
    pub fn id(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Parse a tool identifier. Unknown or empty ids mean "no tool".
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "■",
            ShapeKind::Circle => "●",
            ShapeKind::Triangle => "▲",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Stable identity of a placed shape.
///
/// Two shapes with equal geometry and color still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placement parameters for a new shape.
///
/// `height: None` gives the shape square proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub color: Color32,
    pub position: Pos2,
    pub width: f32,
    pub height: Option<f32>,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            position: Pos2::ZERO,
            width: DEFAULT_SHAPE_WIDTH,
            height: None,
        }
    }
}

/// A placed shape.
///
/// Fields are fixed at construction; the outline is computed once from
/// kind, position and size and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    position: Pos2,
    size: Vec2,
    color: Color32,
    outline: Outline,
}

impl Shape {
    /// Create a shape of `kind` with a fresh id
    pub fn new(kind: ShapeKind, params: ShapeParams) -> Self {
        let size = vec2(params.width, params.height.unwrap_or(params.width));
        Self {
            id: ShapeId::new(),
            kind,
            position: params.position,
            size,
            color: params.color,
            outline: Outline::new(kind, params.position, size),
        }
    }

    /// Create a shape from an optional kind.
    ///
    /// A missing kind is a caller bug: it is logged and no shape is produced.
    pub fn from_kind(kind: Option<ShapeKind>, params: ShapeParams) -> EditorResult<Self> {
        match kind {
            Some(kind) => Ok(Self::new(kind, params)),
            None => {
                log::error!("A shape needs a kind (rectangle, circle or triangle)");
                Err(EditorError::ContractViolation(
                    "shape constructed without a kind".to_string(),
                ))
            }
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Center point in canvas coordinates
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod tools;

pub use app::ShapePlacerApp;
pub use config::EditorConfig;
pub use editor::{ClickOutcome, Editor, Mode};
pub use error::{EditorError, EditorResult};
pub use geometry::Outline;
pub use input::{CanvasInput, InputLocation};
pub use renderer::{PainterSurface, RenderSurface};
pub use shape::{Shape, ShapeId, ShapeKind, ShapeParams};
pub use tools::{ToolInputs, ToolSettings};

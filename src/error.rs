use thiserror::Error;

/// Errors surfaced by the shape editor.
///
/// None of these are recovered from inside the editor: they are logged and
/// the offending operation produces no object or effect.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// The caller broke a construction contract (e.g. a shape without a kind)
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// The render surface has no usable drawing context
    #[error("Render surface has no valid drawing context")]
    InvalidSurface,

    /// A tool control holds a value the editor cannot use
    #[error("Invalid {field}: {value:?} (expected a positive number)")]
    InvalidToolInput { field: &'static str, value: String },
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

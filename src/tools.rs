use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};
use crate::shape::DEFAULT_SHAPE_WIDTH;

/// Raw values of the tool controls, exactly as the user typed them.
///
/// Persisted between sessions so the toolbar comes back the way it was left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolInputs {
    pub color: Color32,
    pub width: String,
    /// Blank means "same as width"
    pub height: String,
}

impl Default for ToolInputs {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: DEFAULT_SHAPE_WIDTH.to_string(),
            height: String::new(),
        }
    }
}

impl ToolInputs {
    /// Validate the controls into numbers the editor can place shapes with
    pub fn parse(&self) -> EditorResult<ToolSettings> {
        let width = parse_dimension("width", &self.width)?;
        let height = if self.height.trim().is_empty() {
            None
        } else {
            Some(parse_dimension("height", &self.height)?)
        };

        Ok(ToolSettings {
            color: self.color,
            width,
            height,
        })
    }
}

fn parse_dimension(field: &'static str, value: &str) -> EditorResult<f32> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(EditorError::InvalidToolInput {
            field,
            value: value.to_string(),
        }),
    }
}

/// Validated tool values handed to the editor at click time.
///
/// Width and height are finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub color: Color32,
    pub width: f32,
    pub height: Option<f32>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: DEFAULT_SHAPE_WIDTH,
            height: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(width: &str, height: &str) -> ToolInputs {
        ToolInputs {
            color: Color32::RED,
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    #[test]
    fn test_blank_height_uses_width() {
        let settings = inputs("20", "  ").parse().unwrap();
        assert_eq!(settings.width, 20.0);
        assert_eq!(settings.height, None);
        assert_eq!(settings.color, Color32::RED);
    }

    #[test]
    fn test_explicit_height() {
        let settings = inputs(" 12.5 ", "40").parse().unwrap();
        assert_eq!(settings.width, 12.5);
        assert_eq!(settings.height, Some(40.0));
    }

    #[test]
    fn test_rejects_bad_width() {
        for bad in ["", "abc", "-5", "0", "inf", "NaN"] {
            let err = inputs(bad, "").parse().unwrap_err();
            assert_eq!(
                err,
                EditorError::InvalidToolInput {
                    field: "width",
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_rejects_bad_height() {
        let err = inputs("10", "tall").parse().unwrap_err();
        assert!(matches!(err, EditorError::InvalidToolInput { field: "height", .. }));
    }

    #[test]
    fn test_default_inputs_parse() {
        let settings = ToolInputs::default().parse().unwrap();
        assert_eq!(settings, ToolSettings::default());
    }
}

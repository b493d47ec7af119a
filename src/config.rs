use egui::{Color32, Vec2, vec2};
use serde::{Deserialize, Serialize};

/// Editor-wide settings, restored from eframe storage on startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Canvas fill behind all shapes
    pub background: Color32,
    /// Share of the available width given to the canvas
    pub width_fraction: f32,
    /// Share of the available height given to the canvas
    pub height_fraction: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            width_fraction: 0.8,
            height_fraction: 0.95,
        }
    }
}

impl EditorConfig {
    /// Canvas dimensions for a given amount of available space
    pub fn canvas_size(&self, available: Vec2) -> Vec2 {
        let fraction = |f: f32| if f.is_finite() { f.clamp(0.0, 1.0) } else { 1.0 };
        vec2(
            (available.x * fraction(self.width_fraction)).round(),
            (available.y * fraction(self.height_fraction)).round(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_uses_fractions() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas_size(vec2(1000.0, 800.0)), vec2(800.0, 760.0));
    }

    #[test]
    fn test_out_of_range_fractions_are_clamped() {
        let config = EditorConfig {
            width_fraction: 1.5,
            height_fraction: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.canvas_size(vec2(100.0, 50.0)), vec2(100.0, 50.0));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "width_fraction": 0.5 }"#).unwrap();
        assert_eq!(config.width_fraction, 0.5);
        assert_eq!(config.height_fraction, 0.95);
        assert_eq!(config.background, Color32::WHITE);
    }
}

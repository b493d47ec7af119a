use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::input::CanvasInput;
use crate::panels;
use crate::tools::ToolInputs;

/// We derive Deserialize/Serialize so we can persist tool settings on shutdown.
/// The drawing itself is never saved.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ShapePlacerApp {
    tool_inputs: ToolInputs,
    config: EditorConfig,

    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    canvas_input: CanvasInput,
    // Clear confirmation modal is open
    #[serde(skip)]
    show_clear_confirm: bool,
    // Confirmed, waiting for the canvas to apply it
    #[serde(skip)]
    clear_requested: bool,
}

impl ShapePlacerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous tool settings (if any).
        // Note that you must enable the `persistence` feature for this to work.
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<Self>(storage, eframe::APP_KEY) {
                log::info!("Restored tool settings: {:?}", app.tool_inputs);
                return app;
            }
        }

        Default::default()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn tool_inputs(&self) -> &ToolInputs {
        &self.tool_inputs
    }

    pub fn tool_inputs_mut(&mut self) -> &mut ToolInputs {
        &mut self.tool_inputs
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn canvas_input(&self) -> &CanvasInput {
        &self.canvas_input
    }

    pub fn canvas_input_mut(&mut self) -> &mut CanvasInput {
        &mut self.canvas_input
    }

    /// Ask the user before wiping the canvas
    pub fn request_clear(&mut self) {
        if self.editor.is_empty() {
            log::debug!("Canvas already empty, nothing to clear");
            return;
        }
        self.show_clear_confirm = true;
    }

    /// Returns true once after the user confirmed a clear
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }

    fn clear_confirm_modal(&mut self, ctx: &egui::Context) {
        if !self.show_clear_confirm {
            return;
        }

        egui::Window::new("Clear canvas")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Remove all {} shapes? This cannot be undone.",
                    self.editor.shapes().len()
                ));
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.show_clear_confirm = false;
                        self.clear_requested = true;
                    }
                    if ui.button("Cancel").clicked() {
                        log::debug!("Clear cancelled");
                        self.show_clear_confirm = false;
                    }
                });
            });
    }
}

impl eframe::App for ShapePlacerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.clear_confirm_modal(ctx);
    }
}

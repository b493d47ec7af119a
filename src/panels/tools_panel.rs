use crate::ShapePlacerApp;
use crate::components::ToolButton;
use crate::editor::Mode;
use crate::shape::ShapeKind;

pub fn tools_panel(app: &mut ShapePlacerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Shapes");

            ui.horizontal(|ui| {
                let pending = app.editor().pending_tool();
                for kind in ShapeKind::ALL {
                    let button = ToolButton::new(kind.icon(), kind.label(), pending == Some(kind));
                    if button.show(ui).clicked() {
                        app.editor_mut().choose_tool(kind);
                    }
                }
            });

            ui.separator();
            ui.heading("Mode");

            ui.horizontal(|ui| {
                let mode = app.editor().mode();
                let toggles = [(Mode::Select, "◻", "Select"), (Mode::Delete, "⌫", "Delete")];
                for (target, icon, tooltip) in toggles {
                    if ToolButton::new(icon, tooltip, mode == target).show(ui).clicked() {
                        app.editor_mut().toggle_mode(target);
                    }
                }
            });

            ui.separator();
            ui.heading("Style");

            let inputs = app.tool_inputs_mut();
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut inputs.color,
                    egui::color_picker::Alpha::Opaque,
                );
            });

            egui::Grid::new("shape_size_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Width:");
                    ui.add(egui::TextEdit::singleline(&mut inputs.width).desired_width(60.0));
                    ui.end_row();

                    ui.label("Height:");
                    ui.add(
                        egui::TextEdit::singleline(&mut inputs.height)
                            .hint_text("= width")
                            .desired_width(60.0),
                    );
                    ui.end_row();
                });

            if let Err(err) = app.tool_inputs().parse() {
                ui.colored_label(egui::Color32::RED, err.to_string());
            }

            ui.separator();

            if ui
                .add_enabled(!app.editor().is_empty(), egui::Button::new("Clear canvas"))
                .clicked()
            {
                app.request_clear();
            }

            ui.separator();

            let editor = app.editor();
            ui.label(format!("Mode: {}", editor.mode().label()));
            ui.label(format!(
                "Tool: {}",
                editor.pending_tool().map_or("none", |kind| kind.label())
            ));
            ui.label(format!("Shapes: {}", editor.shapes().len()));
            ui.label(format!(
                "Selected: {}",
                editor.selected_shape().map_or("none", |shape| shape.kind().label())
            ));
        });
}

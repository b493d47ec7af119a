use crate::ShapePlacerApp;
use crate::editor::Mode;
use crate::renderer::PainterSurface;
use crate::tools::ToolSettings;

pub fn central_panel(app: &mut ShapePlacerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.config().canvas_size(ui.available_size());
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click());

        let canvas_rect = response.rect;
        app.canvas_input_mut().set_canvas_rect(canvas_rect);

        let mut surface = PainterSurface::new(&painter, canvas_rect, app.config().background);
        let mut redrawn = false;

        if app.editor().canvas_size() != canvas_rect.size() {
            app.editor_mut().resize(canvas_rect.size(), &mut surface);
            redrawn = true;
        }

        if app.take_clear_request() {
            app.editor_mut().clear(&mut surface);
            redrawn = true;
        }

        if let Some(location) = app.canvas_input().click_location(&response) {
            let settings = match (app.editor().mode(), app.tool_inputs().parse()) {
                (_, Ok(settings)) => Some(settings),
                // Only placing a shape reads the tool values
                (Mode::Select | Mode::Delete, Err(_)) => Some(ToolSettings::default()),
                (Mode::Draw, Err(err)) => {
                    log::warn!("Ignoring draw click: {}", err);
                    None
                }
            };

            if let Some(settings) = settings {
                app.editor_mut()
                    .handle_click(location.position, &settings, &mut surface);
                redrawn = true;
            }
        }

        // Immediate mode: the canvas has to be painted every frame
        if !redrawn {
            if let Err(err) = app.editor().render(&mut surface) {
                log::error!("Failed to render canvas: {}", err);
            }
        }
    });
}

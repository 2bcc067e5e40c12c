use eframe::egui;

use crate::PaintApp;
use crate::geometry::fit_square;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Keep cells square: the canvas is the largest square that fits
        let canvas_rect = fit_square(ui.available_rect_before_wrap().shrink(8.0));
        let response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

        app.handle_canvas_input(ctx, canvas_rect, &response);

        let painter = ui.painter_at(canvas_rect);
        app.render_canvas(ctx, &painter, canvas_rect);
    });
}

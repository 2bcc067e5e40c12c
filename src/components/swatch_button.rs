use eframe::egui;

use crate::color::Color;

/// A square color swatch that can be clicked to pick its color
pub struct SwatchButton {
    pub color: Color,
    pub selected: bool,
    pub side: f32,
}

impl SwatchButton {
    pub fn new(color: Color, selected: bool) -> Self {
        Self {
            color,
            selected,
            side: 22.0,
        }
    }

    pub fn with_side(mut self, side: f32) -> Self {
        self.side = side;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(self.side, self.side), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 3.0, egui::Color32::from(self.color));

            let outline = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::from_gray(200))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(60))
            };
            ui.painter().rect_stroke(rect, 3.0, outline);
        }

        response.on_hover_text(self.color.to_upper_hex())
    }
}

use eframe::egui;

use crate::PaintApp;
use crate::color::Color;
use crate::components::SwatchButton;
use crate::input::InputEvent;
use crate::palette::PALETTES;
use crate::symmetry::SymmetryMode;
use crate::tools::ToolKind;

/// Slider range offered for the grid dimension
const GRID_SIZE_RANGE: std::ops::RangeInclusive<usize> = 4..=64;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.editor().active_tool();
            for tool in ToolKind::ALL {
                if ui.selectable_label(active_tool == tool, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.dispatch(InputEvent::ToolSelected(tool));
                }
            }
            ui.separator();

            color_section(app, ui);
            ui.separator();

            palette_section(app, ui);
            ui.separator();

            symmetry_section(app, ui);
            ui.separator();

            canvas_section(app, ui);

            if let Some(error) = app.last_error() {
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.separator();
            ui.small("P Pen | E Eraser | I Eyedropper | F Fill | G Grid | C Clear");
        });
}

fn color_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let paint_color = app.editor().paint_color();
    ui.horizontal(|ui| {
        SwatchButton::new(paint_color, false).with_side(28.0).show(ui);
        ui.monospace(paint_color.to_upper_hex());

        let mut rgb = paint_color.to_array();
        if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
            app.dispatch(InputEvent::ColorPicked(Color::from(rgb)));
        }
    });
}

fn palette_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let mut index = app.palette_index().min(PALETTES.len() - 1);
    egui::ComboBox::from_label("Palette")
        .selected_text(PALETTES[index].name)
        .show_ui(ui, |ui| {
            for (i, palette) in PALETTES.iter().enumerate() {
                ui.selectable_value(&mut index, i, palette.name);
            }
        });
    if index != app.palette_index() {
        app.set_palette_index(index);
    }

    let paint_color = app.editor().paint_color();
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for color in PALETTES[index].unique_colors() {
            if SwatchButton::new(color, color == paint_color).show(ui).clicked() {
                picked = Some(color);
            }
        }
    });
    if let Some(color) = picked {
        app.dispatch(InputEvent::ColorPicked(color));
    }
}

fn symmetry_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let symmetry = app.editor().tool_state().symmetry;

    let mut enabled = symmetry.enabled;
    if ui.checkbox(&mut enabled, "Symmetry").changed() {
        app.dispatch(InputEvent::SymmetryToggled(enabled));
    }

    let mut mode = symmetry.mode;
    ui.add_enabled_ui(symmetry.enabled, |ui| {
        egui::ComboBox::from_label("Mode")
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for option in SymmetryMode::ALL {
                    ui.selectable_value(&mut mode, option, option.label());
                }
            });
    });
    if mode != symmetry.mode {
        app.dispatch(InputEvent::SymmetryModeChanged(mode));
    }
}

fn canvas_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let size = app.editor().grid().size();
    let mut requested = size;
    if ui
        .add(egui::Slider::new(&mut requested, GRID_SIZE_RANGE).text("Grid size"))
        .changed()
        && requested != size
    {
        app.dispatch(InputEvent::ResizeRequested(requested));
    }

    ui.horizontal(|ui| {
        ui.label(format!("{size}×{size}"));
        ui.label(format!("{} pixels", size * size));
    });

    ui.horizontal(|ui| {
        let grid_label = if app.show_grid_lines() {
            "Hide Grid"
        } else {
            "Show Grid"
        };
        if ui.button(grid_label).clicked() {
            app.toggle_grid_lines();
        }
        if ui.button("Clear").clicked() {
            app.request_clear();
        }
    });
}

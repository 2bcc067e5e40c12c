use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::config::EditorConfig;
use crate::event::{EventBus, LogHandler};
use crate::geometry::cell_at;
use crate::input::{InputEvent, PointerSample, PointerTracker, route_event};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::CanvasRenderer;
use crate::shortcuts::{ShortcutAction, collect_shortcuts};
use crate::state::Editor;

/// The pixel painting application: one editor, one canvas, one side panel
pub struct PaintApp {
    editor: Editor,
    bus: EventBus,
    renderer: Rc<RefCell<CanvasRenderer>>,
    pointer: PointerTracker,
    show_grid_lines: bool,
    show_clear_confirm: bool,
    palette_index: usize,
    last_error: Option<String>,
}

impl std::fmt::Debug for PaintApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintApp")
            .field("editor", &self.editor)
            .field("bus", &self.bus)
            .field("show_grid_lines", &self.show_grid_lines)
            .finish_non_exhaustive()
    }
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = Editor::new(&config).unwrap_or_else(|err| {
            log::warn!("Ignoring configuration: {err}");
            Editor::default()
        });

        let renderer = Rc::new(RefCell::new(CanvasRenderer::new(editor.grid())));
        let bus = EventBus::new();
        bus.subscribe(Box::new(Rc::clone(&renderer)));
        bus.subscribe(Box::new(LogHandler));

        let size = editor.grid().size();
        log::info!("Pixel canvas ready: {size}x{size}");

        Self {
            editor,
            bus,
            renderer,
            pointer: PointerTracker::new(),
            show_grid_lines: config.show_grid_lines,
            show_clear_confirm: false,
            palette_index: 0,
            last_error: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Sends one event through the editor and on to every subscriber
    pub fn dispatch(&mut self, event: InputEvent) {
        match route_event(&event, &mut self.editor, &self.bus) {
            Ok(_) => self.last_error = None,
            Err(err) => {
                log::warn!("Rejected {event:?}: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn show_grid_lines(&self) -> bool {
        self.show_grid_lines
    }

    pub fn toggle_grid_lines(&mut self) {
        self.show_grid_lines = !self.show_grid_lines;
        log::info!("Grid lines: {}", if self.show_grid_lines { "ON" } else { "OFF" });
    }

    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub fn set_palette_index(&mut self, index: usize) {
        self.palette_index = index;
    }

    /// Opens the clear confirmation; the canvas is only cleared once confirmed
    pub fn request_clear(&mut self) {
        self.show_clear_confirm = true;
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.show_clear_confirm
    }

    /// Feeds this frame's pointer state over `canvas` to the editor
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas: egui::Rect, response: &egui::Response) {
        if self.show_clear_confirm {
            return;
        }

        let mut sample = PointerSample::from_egui(ctx, canvas, self.editor.grid().size());
        if sample.pressed && !response.hovered() {
            // Presses on widgets drawn over the canvas are not strokes
            sample.cell = None;
        }
        for event in self.pointer.update(sample) {
            self.dispatch(event);
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, canvas: egui::Rect) {
        let mut renderer = self.renderer.borrow_mut();
        renderer.render(ctx, painter, canvas, self.show_grid_lines);

        if self.show_clear_confirm {
            return;
        }
        let size = self.editor.grid().size();
        if let Some(coord) = ctx.pointer_hover_pos().and_then(|pos| cell_at(canvas, pos, size)) {
            renderer.paint_hover(painter, canvas, coord);
        }
    }

    fn apply_shortcuts(&mut self, ctx: &egui::Context) {
        for action in collect_shortcuts(ctx) {
            match action {
                ShortcutAction::SelectTool(tool) => self.dispatch(InputEvent::ToolSelected(tool)),
                ShortcutAction::ToggleGridLines => self.toggle_grid_lines(),
                ShortcutAction::RequestClear => self.request_clear(),
            }
        }
    }

    fn clear_confirmation(&mut self, ctx: &egui::Context) {
        if !self.show_clear_confirm {
            return;
        }

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Clear canvas?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Clear entire canvas? This cannot be undone!");
                ui.horizontal(|ui| {
                    confirmed = ui.button("Clear").clicked();
                    cancelled = ui.button("Cancel").clicked();
                });
            });

        if confirmed {
            self.show_clear_confirm = false;
            self.dispatch(InputEvent::ClearRequested);
        } else if cancelled || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.show_clear_confirm = false;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.show_clear_confirm {
            self.apply_shortcuts(ctx);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.clear_confirmation(ctx);
    }
}

use eframe::egui::{self, Key};

use crate::tools::ToolKind;

/// What a keyboard shortcut asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectTool(ToolKind),
    ToggleGridLines,
    /// Ask to clear the canvas; the app still confirms first
    RequestClear,
}

/// The fixed key bindings: P/E/I/F pick tools, G toggles grid lines, C clears
pub fn action_for_key(key: Key) -> Option<ShortcutAction> {
    match key {
        Key::P => Some(ShortcutAction::SelectTool(ToolKind::Pen)),
        Key::E => Some(ShortcutAction::SelectTool(ToolKind::Eraser)),
        Key::I => Some(ShortcutAction::SelectTool(ToolKind::Eyedropper)),
        Key::F => Some(ShortcutAction::SelectTool(ToolKind::Fill)),
        Key::G => Some(ShortcutAction::ToggleGridLines),
        Key::C => Some(ShortcutAction::RequestClear),
        _ => None,
    }
}

/// Shortcut actions triggered this frame.
/// Nothing fires while a text field has keyboard focus.
pub fn collect_shortcuts(ctx: &egui::Context) -> Vec<ShortcutAction> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } if modifiers.is_none() => action_for_key(*key),
                _ => None,
            })
            .collect()
    })
}

use crate::color::Color;
use crate::config::EditorConfig;
use crate::symmetry::SymmetrySettings;
use crate::tools::ToolKind;

/// The user's current tool choices. Lives for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    pub active_tool: ToolKind,
    pub paint_color: Color,
    pub symmetry: SymmetrySettings,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl ToolState {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            active_tool: config.tool,
            paint_color: config.paint_color,
            symmetry: config.symmetry,
        }
    }
}

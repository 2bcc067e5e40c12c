use crate::color::Color;
use crate::symmetry::SymmetrySettings;
use crate::tools::ToolKind;

/// Notifications the editor produces for the screen and other observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// One cell now holds `color`
    CellChanged { row: i32, col: i32, color: Color },
    /// The eyedropper picked `color` up from the canvas
    ColorSampled(Color),
    /// The grid was replaced (resize) or reset (clear); every cell is `background`
    GridRebuilt { size: usize, background: Color },
    ToolChanged { old: ToolKind, new: ToolKind },
    PaintColorChanged(Color),
    SymmetryChanged(SymmetrySettings),
    StrokeStarted { tool: ToolKind },
    StrokeEnded { tool: ToolKind },
}

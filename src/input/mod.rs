use crate::color::Color;
use crate::grid::Coord;
use crate::symmetry::SymmetryMode;
use crate::tools::ToolKind;

mod pointer;
mod router;

pub use pointer::{PointerSample, PointerTracker};
pub use router::route_event;

/// Every event the editor consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer button went down over a cell; starts a stroke for drawing tools
    PointerPress(Coord),
    /// Pointer moved onto another cell while the button is held
    PointerDrag(Coord),
    /// Pointer button went up anywhere
    PointerRelease,
    ToolSelected(ToolKind),
    /// A color chosen from the picker or a palette swatch
    ColorPicked(Color),
    SymmetryToggled(bool),
    SymmetryModeChanged(SymmetryMode),
    ResizeRequested(usize),
    ClearRequested,
}

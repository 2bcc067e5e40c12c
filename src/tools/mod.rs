use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{EditorError, EditorResult};
use crate::event::EditorEvent;
use crate::grid::{Coord, Grid};
use crate::state::ToolState;

mod draw_helper;
mod eraser;
mod eyedropper;
mod fill;
mod pen;

pub use eraser::EraserTool;
pub use eyedropper::EyedropperTool;
pub use fill::FillTool;
pub use pen::PenTool;

/// Everything a tool may touch while handling one pointer event
pub struct ToolContext<'a> {
    pub grid: &'a mut Grid,
    pub state: &'a mut ToolState,
    /// Notifications produced so far for the event being handled
    pub events: &'a mut Vec<EditorEvent>,
}

impl ToolContext<'_> {
    /// Writes one cell and records the change notification
    pub fn paint(&mut self, coord: Coord, color: Color) -> EditorResult<()> {
        self.grid.set(coord, color)?;
        self.events.push(EditorEvent::CellChanged {
            row: coord.row,
            col: coord.col,
            color,
        });
        Ok(())
    }

    /// Switches the active tool, recording the change if there was one
    pub fn select_tool(&mut self, tool: ToolKind) {
        let old = self.state.active_tool;
        if old != tool {
            self.state.active_tool = tool;
            self.events.push(EditorEvent::ToolChanged { old, new: tool });
        }
    }
}

/// Tool trait defines how a drawing tool reacts to pointer input on a cell
pub trait Tool: Send + Sync {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on a cell
    fn on_pointer_press(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()>;

    /// Handle the pointer entering another cell while it is held.
    /// Tools that act on the press alone keep the default.
    fn on_pointer_drag(&self, _coord: Coord, _ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        Ok(())
    }
}

/// The fixed set of tools the editor offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Eyedropper,
    Fill,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Eyedropper,
        ToolKind::Fill,
    ];

    /// The implementation behind this tool
    pub fn tool(self) -> &'static dyn Tool {
        match self {
            ToolKind::Pen => &PenTool,
            ToolKind::Eraser => &EraserTool,
            ToolKind::Eyedropper => &EyedropperTool,
            ToolKind::Fill => &FillTool,
        }
    }

    pub fn name(self) -> &'static str {
        self.tool().name()
    }

    /// Button text, including the keyboard shortcut
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Pen => "Pen (P)",
            ToolKind::Eraser => "Eraser (E)",
            ToolKind::Eyedropper => "Eyedropper (I)",
            ToolKind::Fill => "Fill (F)",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::UnknownTool(s.to_string()))
    }
}

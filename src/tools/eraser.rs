use super::draw_helper::paint_mirrored;
use super::{Tool, ToolContext};
use crate::error::EditorResult;
use crate::grid::Coord;

/// Resets cells to the grid background, honoring symmetry
#[derive(Debug, Clone, Copy, Default)]
pub struct EraserTool;

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "eraser"
    }

    fn on_pointer_press(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        let background = ctx.grid.background();
        paint_mirrored(coord, background, ctx)
    }

    fn on_pointer_drag(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        self.on_pointer_press(coord, ctx)
    }
}

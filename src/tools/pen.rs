use super::draw_helper::paint_mirrored;
use super::{Tool, ToolContext};
use crate::error::EditorResult;
use crate::grid::Coord;

/// Paints cells with the current paint color, honoring symmetry
#[derive(Debug, Clone, Copy, Default)]
pub struct PenTool;

impl Tool for PenTool {
    fn name(&self) -> &'static str {
        "pen"
    }

    fn on_pointer_press(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        paint_mirrored(coord, ctx.state.paint_color, ctx)
    }

    fn on_pointer_drag(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        paint_mirrored(coord, ctx.state.paint_color, ctx)
    }
}

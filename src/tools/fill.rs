use super::{Tool, ToolContext};
use crate::error::EditorResult;
use crate::event::EditorEvent;
use crate::flood_fill::flood_fill;
use crate::grid::Coord;

/// Flood-fills the region under the pointer with the paint color.
/// Symmetry does not apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillTool;

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn on_pointer_press(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        let target = ctx.grid.get(coord)?;
        let replacement = ctx.state.paint_color;
        if target == replacement {
            return Ok(());
        }

        let painted = flood_fill(ctx.grid, coord, target, replacement);
        ctx.events.extend(painted.into_iter().map(|cell| EditorEvent::CellChanged {
            row: cell.row,
            col: cell.col,
            color: replacement,
        }));
        Ok(())
    }
}

use super::{Tool, ToolContext, ToolKind};
use crate::error::EditorResult;
use crate::event::EditorEvent;
use crate::grid::Coord;

/// Picks the paint color up from a cell, then hands over to the pen
#[derive(Debug, Clone, Copy, Default)]
pub struct EyedropperTool;

impl Tool for EyedropperTool {
    fn name(&self) -> &'static str {
        "eyedropper"
    }

    fn on_pointer_press(&self, coord: Coord, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
        let picked = ctx.grid.get(coord)?;
        ctx.state.paint_color = picked;
        ctx.events.push(EditorEvent::ColorSampled(picked));
        log::info!("Picked color {picked} at ({}, {})", coord.row, coord.col);

        ctx.select_tool(ToolKind::Pen);
        Ok(())
    }
}

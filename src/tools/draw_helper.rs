use super::ToolContext;
use crate::color::Color;
use crate::error::EditorResult;
use crate::grid::Coord;

/// Paints `coord` and every cell the active symmetry mirrors it onto.
///
/// The pressed cell is bounds-checked before anything is written, so a
/// rejected coordinate leaves the grid untouched.
pub(super) fn paint_mirrored(coord: Coord, color: Color, ctx: &mut ToolContext<'_>) -> EditorResult<()> {
    ctx.grid.get(coord)?;
    let targets = ctx.state.symmetry.mirror(coord, ctx.grid.size());
    for target in targets {
        ctx.paint(target, color)?;
    }
    Ok(())
}

use crate::color::Color;
use crate::grid::{Coord, Grid};

/// Repaints the 4-connected region of `target` cells reachable from `origin`.
///
/// Nothing happens when `origin` is off the grid, does not hold `target`, or
/// `target == replacement`. Every cell is repainted before its neighbors are
/// queued, so each cell enters the work-list at most once and the list never
/// grows past the cell count.
///
/// Returns the repainted cells in the order they were painted.
pub fn flood_fill(grid: &mut Grid, origin: Coord, target: Color, replacement: Color) -> Vec<Coord> {
    let mut painted = Vec::new();
    if target == replacement {
        return painted;
    }
    if !grid.compare_swap(origin, target, replacement) {
        return painted;
    }

    painted.push(origin);
    let mut stack = vec![origin];
    while let Some(coord) = stack.pop() {
        // Pushed in reverse so the first neighbor (up) is explored first.
        for neighbor in coord.neighbors().into_iter().rev() {
            if grid.compare_swap(neighbor, target, replacement) {
                painted.push(neighbor);
                stack.push(neighbor);
            }
        }
    }

    log::trace!(
        "Flood fill from ({}, {}) repainted {} cells with {replacement}",
        origin.row,
        origin.col,
        painted.len()
    );
    painted
}

use eframe::egui::{Pos2, Rect, Vec2, pos2};

use crate::grid::Coord;

/// The largest square centered in `available`
pub fn fit_square(available: Rect) -> Rect {
    let side = available.width().min(available.height()).max(0.0);
    Rect::from_center_size(available.center(), Vec2::splat(side))
}

/// The cell under `pos` when `canvas` is split into `size × size` cells,
/// or `None` if `pos` is outside the canvas
pub fn cell_at(canvas: Rect, pos: Pos2, size: usize) -> Option<Coord> {
    if size == 0 || canvas.width() <= 0.0 || canvas.height() <= 0.0 || !canvas.contains(pos) {
        return None;
    }
    let cells = size as f32;
    let rel = pos - canvas.min;
    let max_index = i32::try_from(size - 1).ok()?;
    // The max edge counts as inside the canvas, so clamp it onto the last cell.
    let col = ((rel.x / canvas.width() * cells).floor() as i32).min(max_index);
    let row = ((rel.y / canvas.height() * cells).floor() as i32).min(max_index);
    Some(Coord::new(row, col))
}

/// Screen rectangle covered by one cell
pub fn cell_rect(canvas: Rect, coord: Coord, size: usize) -> Rect {
    let cell = canvas.size() / size.max(1) as f32;
    let min = pos2(
        canvas.min.x + coord.col as f32 * cell.x,
        canvas.min.y + coord.row as f32 * cell.y,
    );
    Rect::from_min_size(min, cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), Vec2::splat(400.0))
    }

    #[test]
    fn test_cell_at_maps_positions() {
        assert_eq!(cell_at(canvas(), pos2(100.0, 50.0), 16), Some(Coord::new(0, 0)));
        assert_eq!(cell_at(canvas(), pos2(130.0, 80.0), 16), Some(Coord::new(1, 1)));
        // 25px cells: x=260 is column 6, y=110 is row 2
        assert_eq!(cell_at(canvas(), pos2(260.0, 110.0), 16), Some(Coord::new(2, 6)));
        assert_eq!(cell_at(canvas(), pos2(500.0, 450.0), 16), Some(Coord::new(15, 15)));
    }

    #[test]
    fn test_cell_at_outside_canvas() {
        assert_eq!(cell_at(canvas(), pos2(99.0, 60.0), 16), None);
        assert_eq!(cell_at(canvas(), pos2(200.0, 451.0), 16), None);
        assert_eq!(cell_at(canvas(), pos2(200.0, 200.0), 0), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let coord = Coord::new(3, 7);
        let rect = cell_rect(canvas(), coord, 8);
        assert_eq!(rect.size(), Vec2::splat(50.0));
        assert_eq!(cell_at(canvas(), rect.center(), 8), Some(coord));
    }

    #[test]
    fn test_fit_square_centers() {
        let square = fit_square(Rect::from_min_size(Pos2::ZERO, Vec2::new(300.0, 100.0)));
        assert_eq!(square.size(), Vec2::splat(100.0));
        assert_eq!(square.center(), pos2(150.0, 50.0));
    }
}

use pixel_paint::{Coord, SymmetryMode, mirror};

fn coords(list: &[(i32, i32)]) -> Vec<Coord> {
    list.iter().copied().map(Coord::from).collect()
}

#[test]
fn test_disabled_returns_only_target() {
    for mode in SymmetryMode::ALL {
        assert_eq!(mirror(Coord::new(3, 1), 8, mode, false), coords(&[(3, 1)]));
    }
}

#[test]
fn test_vertical() {
    assert_eq!(
        mirror(Coord::new(3, 1), 8, SymmetryMode::Vertical, true),
        coords(&[(3, 1), (3, 6)])
    );
}

#[test]
fn test_horizontal() {
    assert_eq!(
        mirror(Coord::new(3, 1), 8, SymmetryMode::Horizontal, true),
        coords(&[(3, 1), (4, 1)])
    );
}

#[test]
fn test_quad_order() {
    assert_eq!(
        mirror(Coord::new(1, 2), 8, SymmetryMode::Quad, true),
        coords(&[(1, 2), (1, 5), (6, 2), (6, 5)])
    );
}

#[test]
fn test_diagonal_order() {
    assert_eq!(
        mirror(Coord::new(1, 2), 8, SymmetryMode::Diagonal, true),
        coords(&[(1, 2), (2, 1), (6, 5), (5, 6)])
    );
}

#[test]
fn test_deduplicates_on_axes() {
    // The center of an odd grid lies on both axes
    assert_eq!(
        mirror(Coord::new(3, 3), 7, SymmetryMode::Quad, true),
        coords(&[(3, 3)])
    );
    assert_eq!(
        mirror(Coord::new(2, 3), 7, SymmetryMode::Vertical, true),
        coords(&[(2, 3)])
    );
    // On the main diagonal the swap is the identity
    assert_eq!(
        mirror(Coord::new(0, 0), 8, SymmetryMode::Diagonal, true),
        coords(&[(0, 0), (7, 7)])
    );
    assert_eq!(
        mirror(Coord::new(0, 0), 1, SymmetryMode::Quad, true),
        coords(&[(0, 0)])
    );
}

#[test]
fn test_corner_reaches_all_four_corners() {
    assert_eq!(
        mirror(Coord::new(0, 0), 8, SymmetryMode::Quad, true),
        coords(&[(0, 0), (0, 7), (7, 0), (7, 7)])
    );
}

#[test]
fn test_anti_diagonal_cell() {
    assert_eq!(
        mirror(Coord::new(2, 5), 8, SymmetryMode::Diagonal, true),
        coords(&[(2, 5), (5, 2)])
    );
}

#[test]
fn test_all_results_in_bounds_and_distinct() {
    for size in [1usize, 2, 5, 8, 16] {
        let n = size as i32;
        for mode in SymmetryMode::ALL {
            for row in 0..n {
                for col in 0..n {
                    let target = Coord::new(row, col);
                    let cells = mirror(target, size, mode, true);

                    assert_eq!(cells[0], target);
                    assert!(matches!(cells.len(), 1 | 2 | 4), "{cells:?}");
                    for (i, cell) in cells.iter().enumerate() {
                        assert!((0..n).contains(&cell.row) && (0..n).contains(&cell.col));
                        assert!(!cells[i + 1..].contains(cell), "{cell:?} repeated");
                    }
                }
            }
        }
    }
}

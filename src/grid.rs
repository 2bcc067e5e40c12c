use crate::color::Color;
use crate::error::{GridError, GridResult};

/// Smallest grid side length the model accepts
pub const MIN_GRID_SIZE: usize = 1;
/// Largest grid side length the model accepts
pub const MAX_GRID_SIZE: usize = 256;
/// Side length of a freshly opened canvas
pub const DEFAULT_GRID_SIZE: usize = 16;

/// A `(row, col)` cell reference.
///
/// Components are signed so that positions just off the canvas (pointer
/// positions, flood-fill neighbors) can be expressed and rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four von Neumann neighbors: up, down, left, right
    pub const fn neighbors(self) -> [Coord; 4] {
        [
            Coord::new(self.row - 1, self.col),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row, self.col - 1),
            Coord::new(self.row, self.col + 1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Checks a requested grid dimension against the supported range
pub fn validate_size(size: usize) -> GridResult<()> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GridError::InvalidSize {
            requested: size,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

/// The square pixel grid: the single source of truth for cell colors.
///
/// Cells are stored row-major, so `cells.len() == size * size` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    background: Color,
    cells: Vec<Color>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            background: Color::WHITE,
            cells: vec![Color::WHITE; DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE],
        }
    }
}

impl Grid {
    /// Creates a `size × size` grid with every cell set to `background`
    pub fn new(size: usize, background: Color) -> GridResult<Self> {
        validate_size(size)?;
        Ok(Self {
            size,
            background,
            cells: vec![background; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Replaces the grid with a fresh `new_size × new_size` background grid.
    ///
    /// An invalid size is rejected and the current cells are kept.
    pub fn resize(&mut self, new_size: usize) -> GridResult<()> {
        validate_size(new_size)?;
        self.size = new_size;
        self.cells = vec![self.background; new_size * new_size];
        log::debug!("Grid rebuilt at {new_size}x{new_size}");
        Ok(())
    }

    /// Resets every cell to the background color
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.offset(coord).is_ok()
    }

    pub fn get(&self, coord: impl Into<Coord>) -> GridResult<Color> {
        let offset = self.offset(coord.into())?;
        Ok(self.cells[offset])
    }

    /// Overwrites one cell, returning the color it held before
    pub fn set(&mut self, coord: impl Into<Coord>, color: Color) -> GridResult<Color> {
        let offset = self.offset(coord.into())?;
        Ok(std::mem::replace(&mut self.cells[offset], color))
    }

    /// Writes `new_color` only when the cell currently holds `expected`
    pub fn compare_swap(&mut self, coord: Coord, expected: Color, new_color: Color) -> bool {
        match self.offset(coord) {
            Ok(offset) if self.cells[offset] == expected => {
                self.cells[offset] = new_color;
                true
            }
            _ => false,
        }
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterates the cells of one row, or `None` if the row does not exist
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        (row < self.size).then(|| &self.cells[row * self.size..(row + 1) * self.size])
    }

    fn offset(&self, coord: Coord) -> GridResult<usize> {
        let out_of_bounds = || GridError::OutOfBounds {
            row: coord.row,
            col: coord.col,
            size: self.size,
        };
        let row = usize::try_from(coord.row).map_err(|_| out_of_bounds())?;
        let col = usize::try_from(coord.col).map_err(|_| out_of_bounds())?;
        if row >= self.size || col >= self.size {
            return Err(out_of_bounds());
        }
        Ok(row * self.size + col)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// The axis set a mirrored stroke is reflected across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryMode {
    /// Mirror left/right across the vertical center line
    #[default]
    Vertical,
    /// Mirror top/bottom across the horizontal center line
    Horizontal,
    /// Both center lines: four-way mirroring
    Quad,
    /// Both main diagonals
    Diagonal,
}

impl SymmetryMode {
    pub const ALL: [SymmetryMode; 4] = [
        SymmetryMode::Vertical,
        SymmetryMode::Horizontal,
        SymmetryMode::Quad,
        SymmetryMode::Diagonal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymmetryMode::Vertical => "Vertical",
            SymmetryMode::Horizontal => "Horizontal",
            SymmetryMode::Quad => "Quad",
            SymmetryMode::Diagonal => "Diagonal",
        }
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether mirroring is on, and which mode applies when it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetrySettings {
    pub enabled: bool,
    pub mode: SymmetryMode,
}

impl SymmetrySettings {
    pub fn mirror(&self, coord: Coord, size: usize) -> Vec<Coord> {
        mirror(coord, size, self.mode, self.enabled)
    }
}

/// Maps one target cell to every cell a mirrored stroke touches.
///
/// `coord` is always first; the rest follow in a fixed per-mode order with
/// duplicates (cells on an axis) dropped. For an in-bounds `coord` every
/// returned cell is in bounds as well.
pub fn mirror(coord: Coord, size: usize, mode: SymmetryMode, enabled: bool) -> Vec<Coord> {
    if !enabled {
        return vec![coord];
    }

    let last = i32::try_from(size).unwrap_or(i32::MAX) - 1;
    let Coord { row, col } = coord;
    let (m_row, m_col) = (last - row, last - col);

    let candidates = match mode {
        SymmetryMode::Vertical => vec![coord, Coord::new(row, m_col)],
        SymmetryMode::Horizontal => vec![coord, Coord::new(m_row, col)],
        SymmetryMode::Quad => vec![
            coord,
            Coord::new(row, m_col),
            Coord::new(m_row, col),
            Coord::new(m_row, m_col),
        ],
        SymmetryMode::Diagonal => vec![
            coord,
            Coord::new(col, row),
            Coord::new(m_row, m_col),
            Coord::new(m_col, m_row),
        ],
    };

    let mut targets = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !targets.contains(&candidate) {
            targets.push(candidate);
        }
    }
    targets
}

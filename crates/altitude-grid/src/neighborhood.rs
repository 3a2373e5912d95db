//! 3x3 neighbourhood sampling.
//!
//! Positions are enumerated x-outer, y-inner:
//!
//! ```text
//!   index:  0 (x-1,y-1)  3 (x,y-1)  6 (x+1,y-1)
//!           1 (x-1,y  )  4 (x,y  )  7 (x+1,y  )
//!           2 (x-1,y+1)  5 (x,y+1)  8 (x+1,y+1)
//! ```
//!
//! Index 4 is the center, 0/2/6/8 are the diagonal corners and 1/3/5/7 the
//! laterals. Anything outside the grid reads as the sentinel, so the grid
//! border behaves like an unknown halo.

use crate::error::Result;
use crate::grid::{coords_of, AltitudeGrid};
use crate::types::{Cell, SENTINEL};

/// A snapshot of the 9 cells around (and including) a center cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    cells: [Cell; 9],
}

impl Neighborhood {
    /// Index of the center cell.
    pub const CENTER: usize = 4;
    /// Diagonal positions, `sqrt(2)` cells from the center.
    pub const CORNER_INDICES: [usize; 4] = [0, 2, 6, 8];
    /// Axis-aligned positions, 1 cell from the center.
    pub const LATERAL_INDICES: [usize; 4] = [1, 3, 5, 7];

    pub fn new(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub fn center(&self) -> Cell {
        self.cells[Self::CENTER]
    }

    /// Known corner values.
    pub fn corners(&self) -> impl Iterator<Item = f64> + '_ {
        Self::CORNER_INDICES.iter().filter_map(|&i| self.cells[i])
    }

    /// Known lateral values.
    pub fn laterals(&self) -> impl Iterator<Item = f64> + '_ {
        Self::LATERAL_INDICES.iter().filter_map(|&i| self.cells[i])
    }

    /// Number of known cells across all 9 positions, center included.
    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl From<[Cell; 9]> for Neighborhood {
    fn from(cells: [Cell; 9]) -> Self {
        Self::new(cells)
    }
}

/// Sample the 3x3 neighbourhood around `(x, y)`.
///
/// Never fails: out-of-grid positions, including the center itself, are
/// reported as the sentinel.
pub fn subgrid(grid: &AltitudeGrid, x: i64, y: i64) -> Neighborhood {
    let mut cells = [SENTINEL; 9];
    let mut k = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
            cells[k] = if grid.contains(px, py) {
                grid.get(px, py).unwrap_or(SENTINEL)
            } else {
                SENTINEL
            };
            k += 1;
        }
    }
    Neighborhood::new(cells)
}

/// Sample the neighbourhood around linear index `i`.
pub fn subgrid_at_index(grid: &AltitudeGrid, i: usize) -> Result<Neighborhood> {
    let (x, y) = coords_of(grid.width(), i)?;
    Ok(subgrid(grid, x as i64, y as i64))
}

//! Flat row-major altitude buffer.
//!
//! Cells are addressed as `x + width * y`. Unknown cells hold the sentinel
//! ([`SENTINEL`]); once a cell is assigned it can only be overwritten with
//! another altitude, never reset to unknown.

use crate::error::{AltitudeGridError, Result};
use crate::types::{Cell, CellPosition, Extrema, SENTINEL};

/// Linear index of `(x, y)` in a row-major grid of width `n`.
///
/// Pure address arithmetic; callers are responsible for bounds.
#[inline]
pub fn index(n: usize, x: usize, y: usize) -> usize {
    x + n * y
}

/// Grid coordinates of linear index `i` in a grid of width `n`.
pub fn coords_of(n: usize, i: usize) -> Result<(usize, usize)> {
    if n == 0 {
        return Err(AltitudeGridError::invalid_dimensions(
            n,
            0,
            "cannot derive coordinates with a zero row width",
        ));
    }
    Ok((i % n, i / n))
}

/// A fixed-size altitude raster.
#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl AltitudeGrid {
    /// Allocate a `width x height` grid with every cell unknown.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        let len = width.checked_mul(height).ok_or_else(|| {
            AltitudeGridError::invalid_dimensions(width, height, "cell count overflows usize")
        })?;
        Ok(Self {
            cells: vec![SENTINEL; len],
            width,
            height,
        })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self> {
        check_dimensions(width, height)?;
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(AltitudeGridError::invalid_dimensions(
                width,
                height,
                format!("buffer holds {} cells", cells.len()),
            ));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Resolve signed coordinates to a linear index, or fail with `OutOfBounds`.
    fn checked_index(&self, x: i64, y: i64) -> Result<usize> {
        let oob = || AltitudeGridError::out_of_bounds(x, y, self.width, self.height);

        let col = usize::try_from(x).map_err(|_| oob())?;
        let row = usize::try_from(y).map_err(|_| oob())?;
        if col >= self.width {
            return Err(oob());
        }

        let i = row
            .checked_mul(self.width)
            .and_then(|offset| offset.checked_add(col))
            .ok_or_else(oob)?;
        if i >= self.cells.len() {
            return Err(oob());
        }
        Ok(i)
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: i64, y: i64) -> Result<Cell> {
        let i = self.checked_index(x, y)?;
        Ok(self.cells[i])
    }

    /// Assign an altitude to the cell at `(x, y)`. No other cell changes.
    pub fn set(&mut self, x: i64, y: i64, value: f64) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = Some(value);
        Ok(())
    }

    /// Read by linear index. `None` past the end of the buffer.
    pub fn get_index(&self, i: usize) -> Option<Cell> {
        self.cells.get(i).copied()
    }

    /// Assign by linear index.
    pub fn set_index(&mut self, i: usize, value: f64) -> Result<()> {
        let (x, y) = coords_of(self.width, i)?;
        match self.cells.get_mut(i) {
            Some(cell) => {
                *cell = Some(value);
                Ok(())
            }
            None => Err(AltitudeGridError::out_of_bounds(
                x as i64,
                y as i64,
                self.width,
                self.height,
            )),
        }
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    pub fn known_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn unknown_count(&self) -> usize {
        self.cells.len() - self.known_count()
    }

    /// Whether every cell holds an altitude.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Positions of every cell still holding the sentinel, in linear order.
    pub fn unknown_positions(&self) -> Vec<CellPosition> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| CellPosition::new(i % self.width, i / self.width))
            .collect()
    }

    /// Minimum and maximum known altitude.
    pub fn extrema(&self) -> Result<Extrema> {
        Extrema::from_cells(&self.cells).ok_or(AltitudeGridError::NoKnownValues)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 {
        return Err(AltitudeGridError::invalid_dimensions(
            width,
            height,
            "width must be > 0",
        ));
    }
    if height == 0 {
        return Err(AltitudeGridError::invalid_dimensions(
            width,
            height,
            "height must be > 0",
        ));
    }
    Ok(())
}

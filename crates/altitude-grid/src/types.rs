//! Core types shared by the rasterizer and the gap-fill driver.

use serde::{Deserialize, Serialize};

/// A single grid cell.
///
/// `None` is the sentinel for "no altitude known yet". Every `Some` value is a
/// valid altitude, zero and negative values included.
pub type Cell = Option<f64>;

/// The unknown-altitude sentinel.
pub const SENTINEL: Cell = None;

/// A known altitude at integer pixel coordinates.
///
/// Coordinates are signed: samples come from an upstream scaling stage and
/// may land outside the grid, which the rasterizer reports instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: i64,
    pub y: i64,
    pub z: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(x: i64, y: i64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(i64, i64, f64)> for Sample {
    fn from((x, y, z): (i64, i64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Position of a cell in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub x: usize,
    pub y: usize,
}

impl CellPosition {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Minimum and maximum known altitude in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Value range (`max - min`).
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Fold known cells into extrema. Returns `None` when no cell is known.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<Self> {
        cells
            .into_iter()
            .flatten()
            .fold(None, |acc: Option<Extrema>, &v| match acc {
                None => Some(Extrema { min: v, max: v }),
                Some(e) => Some(Extrema {
                    min: e.min.min(v),
                    max: e.max.max(v),
                }),
            })
    }
}

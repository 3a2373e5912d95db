//! Common test fixtures for altitude rasterization tests.
//!
//! This module provides the literal scenarios the engine is checked against.

/// Scatter of three samples into an empty 3x3 grid.
pub mod scatter_3x3 {
    pub const WIDTH: usize = 3;
    pub const HEIGHT: usize = 3;

    /// Samples as `(x, y, z)`.
    pub const SAMPLES: [(i64, i64, f64); 3] = [(0, 1, 3.0), (1, 0, 6.0), (1, 2, 9.0)];

    /// Expected grid right after the scatter, before any fill.
    pub const EXPECTED: [Option<f64>; 9] = [
        None,
        Some(6.0),
        None,
        Some(3.0),
        None,
        None,
        None,
        Some(9.0),
        None,
    ];
}

/// Neighbourhood of `(0, 1)` in a linear-valued grid of width 3.
pub mod subgrid_edge {
    pub const WIDTH: usize = 3;
    pub const HEIGHT: usize = 4;
    pub const X: i64 = 0;
    pub const Y: i64 = 1;

    pub const EXPECTED: [Option<f64>; 9] = [
        None,
        None,
        None,
        Some(0.0),
        Some(3.0),
        Some(6.0),
        Some(1.0),
        Some(4.0),
        Some(7.0),
    ];
}

/// A 3x3 grid with three known corners; every other cell becomes fillable.
pub mod three_corners {
    pub const WIDTH: usize = 3;
    pub const HEIGHT: usize = 3;
    pub const SAMPLES: [(i64, i64, f64); 3] = [(0, 0, 100.0), (2, 0, 200.0), (0, 2, 300.0)];
}

/// Two samples far apart on a large grid: nothing ever reaches three known
/// neighbours, so the fill must stall.
pub mod isolated {
    pub const WIDTH: usize = 16;
    pub const HEIGHT: usize = 16;
    pub const SAMPLES: [(i64, i64, f64); 2] = [(1, 1, 50.0), (14, 14, 75.0)];
}

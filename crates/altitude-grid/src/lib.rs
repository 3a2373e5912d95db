//! Sparse Altitude Rasterization and Gap Fill
//!
//! This crate turns a sparse set of integer-pixel altitude samples into a
//! dense raster. Known samples are written into a flat row-major grid, then
//! the remaining unknown cells are filled by repeated local weighted
//! averaging over their 3x3 neighbourhood.
//!
//! # Architecture
//!
//! ```text
//! Samples (x, y, z)
//!      │
//!      ▼
//! scatter() ──► AltitudeGrid (unknown cells = None)
//!      │
//!      ▼
//! ConvergenceDriver::fill()
//!      │
//!      ├─► for each unknown cell: subgrid() ──► WeightedInterpolator
//!      │
//!      ├─► no unknown left ──► FillStatus::Complete
//!      │
//!      └─► sweep filled nothing ──► FillStatus::Partial { unfilled }
//!               │
//!               ▼
//!          AltitudeGrid + Extrema to the renderer
//! ```
//!
//! # Example
//!
//! ```
//! use altitude_grid::{rasterize, FillConfig, Sample};
//!
//! let samples = vec![
//!     Sample::new(0, 0, 120.0),
//!     Sample::new(2, 0, 140.0),
//!     Sample::new(0, 2, 160.0),
//! ];
//! let output = rasterize(3, 3, &samples, &FillConfig::default()).unwrap();
//!
//! assert!(output.is_complete());
//! let extrema = output.extrema().unwrap();
//! assert!(extrema.min >= 120.0 && extrema.max <= 160.0);
//! ```

pub mod config;
pub mod error;
pub mod fill;
pub mod grid;
pub mod interpolation;
pub mod neighborhood;
pub mod pipeline;
pub mod rasterize;
pub mod types;

// Re-export commonly used types at crate root
pub use config::{FillConfig, OutOfBoundsPolicy, SweepMode};
pub use error::{AltitudeGridError, Result};
pub use fill::{fill, ConvergenceDriver, FillReport, FillStatus};
pub use grid::{coords_of, index, AltitudeGrid};
pub use interpolation::{
    interpolate, WeightedInterpolator, CORNER_WEIGHT, LATERAL_WEIGHT, MIN_KNOWN_NEIGHBORS,
};
pub use neighborhood::{subgrid, subgrid_at_index, Neighborhood};
pub use pipeline::{rasterize, RasterOutput};
pub use rasterize::{scatter, ScatterReport};
pub use types::{Cell, CellPosition, Extrema, Sample, SENTINEL};

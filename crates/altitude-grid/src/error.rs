//! Error types for altitude grid processing.

use thiserror::Error;

/// Errors that can occur while building or filling an altitude grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AltitudeGridError {
    /// Grid width/height is zero, or a buffer does not match its declared shape.
    #[error("invalid grid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        reason: String,
    },

    /// A coordinate addresses a cell outside the declared grid shape.
    #[error("cell ({x}, {y}) is outside grid bounds {width}x{height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// The interpolation weight sum was zero.
    ///
    /// The known-neighbour threshold makes this unreachable, so seeing it
    /// means an upstream invariant is broken.
    #[error("interpolation weight sum is zero")]
    DivideByZero,

    /// Extrema were requested for a grid with no known altitude.
    #[error("grid has no known altitude values")]
    NoKnownValues,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AltitudeGridError {
    /// Create an InvalidDimensions error.
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Create an OutOfBounds error.
    pub fn out_of_bounds(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for altitude grid operations.
pub type Result<T> = std::result::Result<T, AltitudeGridError>;

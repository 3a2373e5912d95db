//! Distance-weighted averaging over a 3x3 neighbourhood.
//!
//! Corners sit `sqrt(2)` cells from the center and are weighted by roughly
//! `1/sqrt(2)`; laterals sit 1 cell away and get weight 1. This is a cheap
//! local gap-fill heuristic, not a geostatistical interpolator.

use crate::error::{AltitudeGridError, Result};
use crate::neighborhood::Neighborhood;
use crate::types::{Cell, SENTINEL};

/// Weight of a diagonal neighbour.
pub const CORNER_WEIGHT: f64 = 0.70711356;

/// Weight of an axis-aligned neighbour.
pub const LATERAL_WEIGHT: f64 = 1.0;

/// Known cells required in a neighbourhood before the center is filled.
pub const MIN_KNOWN_NEIGHBORS: usize = 3;

/// Fills the center of a neighbourhood from its known neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedInterpolator {
    min_known: usize,
}

impl Default for WeightedInterpolator {
    fn default() -> Self {
        Self {
            min_known: MIN_KNOWN_NEIGHBORS,
        }
    }
}

impl WeightedInterpolator {
    /// Create an interpolator with a custom known-cell threshold.
    ///
    /// A threshold of zero is raised to one so an all-unknown neighbourhood
    /// can never reach the division.
    pub fn new(min_known: usize) -> Self {
        Self {
            min_known: min_known.max(1),
        }
    }

    pub fn min_known(&self) -> usize {
        self.min_known
    }

    /// Value for the center of `hood`.
    ///
    /// - a known center is returned unchanged
    /// - fewer than `min_known` known cells yields the sentinel (retry next sweep)
    /// - otherwise the corner/lateral weighted mean of the known neighbours
    pub fn interpolate(&self, hood: &Neighborhood) -> Result<Cell> {
        if let Some(center) = hood.center() {
            return Ok(Some(center));
        }

        if hood.known_count() < self.min_known {
            return Ok(SENTINEL);
        }

        let (corner_sum, corner_weight) = hood
            .corners()
            .fold((0.0, 0.0), |(s, w), v| (s + CORNER_WEIGHT * v, w + CORNER_WEIGHT));
        let (lateral_sum, lateral_weight) = hood
            .laterals()
            .fold((0.0, 0.0), |(s, w), v| (s + LATERAL_WEIGHT * v, w + LATERAL_WEIGHT));

        let weight = corner_weight + lateral_weight;
        if weight == 0.0 {
            return Err(AltitudeGridError::DivideByZero);
        }

        Ok(Some((corner_sum + lateral_sum) / weight))
    }
}

/// Interpolate with the default threshold of [`MIN_KNOWN_NEIGHBORS`].
pub fn interpolate(hood: &Neighborhood) -> Result<Cell> {
    WeightedInterpolator::default().interpolate(hood)
}

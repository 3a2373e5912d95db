//! One-call rasterize-and-fill.

use crate::config::FillConfig;
use crate::error::{AltitudeGridError, Result};
use crate::fill::{ConvergenceDriver, FillReport};
use crate::grid::AltitudeGrid;
use crate::rasterize::{scatter, ScatterReport};
use crate::types::{Extrema, Sample};

/// A rasterized, gap-filled grid ready to hand to a renderer.
#[derive(Debug, Clone)]
pub struct RasterOutput {
    pub grid: AltitudeGrid,
    pub scatter: ScatterReport,
    pub fill: FillReport,
}

impl RasterOutput {
    /// Extrema of the known cells; `NoKnownValues` if nothing was known.
    pub fn extrema(&self) -> Result<Extrema> {
        self.grid.extrema()
    }

    pub fn is_complete(&self) -> bool {
        self.fill.is_complete()
    }
}

/// Allocate a `width x height` grid, scatter `samples` into it and fill the gaps.
pub fn rasterize(
    width: usize,
    height: usize,
    samples: &[Sample],
    config: &FillConfig,
) -> Result<RasterOutput> {
    config.validate().map_err(AltitudeGridError::config)?;

    let mut grid = AltitudeGrid::new(width, height)?;
    let scatter = scatter(&mut grid, samples, config.out_of_bounds)?;
    let fill = ConvergenceDriver::new(config).fill(&mut grid)?;

    Ok(RasterOutput {
        grid,
        scatter,
        fill,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutOfBoundsPolicy;
    use crate::fill::FillStatus;

    #[test]
    fn test_rasterize_dense_input() {
        let samples = [
            Sample::new(0, 0, 10.0),
            Sample::new(2, 0, 20.0),
            Sample::new(0, 2, 30.0),
        ];
        let output = rasterize(3, 3, &samples, &FillConfig::default()).unwrap();

        assert!(output.is_complete());
        let extrema = output.extrema().unwrap();
        assert!(extrema.min >= 10.0);
        assert!(extrema.max <= 30.0);
    }

    #[test]
    fn test_rasterize_without_samples() {
        let output = rasterize(2, 2, &[], &FillConfig::default()).unwrap();
        assert!(matches!(output.fill.status, FillStatus::NoData { .. }));
        assert_eq!(output.extrema(), Err(AltitudeGridError::NoKnownValues));
    }

    #[test]
    fn test_rasterize_invalid_config() {
        let config = FillConfig {
            min_known_neighbors: 0,
            ..FillConfig::default()
        };
        assert!(matches!(
            rasterize(2, 2, &[], &config),
            Err(AltitudeGridError::Config(_))
        ));
    }

    #[test]
    fn test_rasterize_invalid_dimensions() {
        assert!(matches!(
            rasterize(0, 2, &[], &FillConfig::default()),
            Err(AltitudeGridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rasterize_skips_out_of_bounds() {
        let config = FillConfig {
            out_of_bounds: OutOfBoundsPolicy::Skip,
            ..FillConfig::default()
        };
        let samples = [Sample::new(0, 0, 1.0), Sample::new(9, 9, 2.0)];
        let output = rasterize(2, 2, &samples, &config).unwrap();
        assert_eq!(output.scatter.skipped, vec![Sample::new(9, 9, 2.0)]);
        assert_eq!(output.grid.get(0, 0).unwrap(), Some(1.0));
    }
}

//! Iterative gap filling.
//!
//! The driver sweeps linear indices `0..len` and fills every unknown cell
//! whose neighbourhood has enough known values. Sweeps repeat until either no
//! unknown cell remains or a sweep fills nothing. Each productive sweep fills
//! at least one cell, so a grid of `len` cells needs at most `len` sweeps.

use crate::config::{FillConfig, SweepMode};
use crate::error::Result;
use crate::grid::AltitudeGrid;
use crate::interpolation::WeightedInterpolator;
use crate::neighborhood::subgrid_at_index;
use crate::types::CellPosition;
use serde::Serialize;

/// Terminal state of a fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FillStatus {
    /// Every cell holds an altitude.
    Complete,
    /// Some cells can never reach the known-neighbour threshold (isolated
    /// samples, cells far outside the sampled area), or the sweep cap was hit.
    Partial { unfilled: Vec<CellPosition> },
    /// The grid had no known cell to start from; nothing was interpolated.
    NoData { unfilled: Vec<CellPosition> },
}

/// Summary of a fill run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillReport {
    /// Sweeps performed, including the final unproductive one on stagnation.
    pub sweeps: usize,
    /// Cells filled by interpolation.
    pub filled: usize,
    #[serde(flatten)]
    pub status: FillStatus,
}

impl FillReport {
    pub fn is_complete(&self) -> bool {
        matches!(self.status, FillStatus::Complete)
    }

    /// Cells still unknown, in linear order.
    pub fn unfilled_positions(&self) -> &[CellPosition] {
        match &self.status {
            FillStatus::Complete => &[],
            FillStatus::Partial { unfilled } | FillStatus::NoData { unfilled } => unfilled,
        }
    }

    pub fn unfilled_count(&self) -> usize {
        self.unfilled_positions().len()
    }
}

/// Repeatedly sweeps a grid, replacing unknown cells with interpolated values.
#[derive(Debug, Clone)]
pub struct ConvergenceDriver {
    interpolator: WeightedInterpolator,
    sweep_mode: SweepMode,
    max_sweeps: Option<usize>,
}

impl Default for ConvergenceDriver {
    fn default() -> Self {
        Self::new(&FillConfig::default())
    }
}

impl ConvergenceDriver {
    pub fn new(config: &FillConfig) -> Self {
        Self {
            interpolator: WeightedInterpolator::new(config.min_known_neighbors),
            sweep_mode: config.sweep_mode,
            max_sweeps: config.max_sweeps,
        }
    }

    /// Fill `grid` in place until complete or stalled.
    pub fn fill(&self, grid: &mut AltitudeGrid) -> Result<FillReport> {
        if grid.known_count() == 0 {
            tracing::warn!(
                width = grid.width(),
                height = grid.height(),
                "Grid has no known altitude, nothing to interpolate"
            );
            return Ok(FillReport {
                sweeps: 0,
                filled: 0,
                status: FillStatus::NoData {
                    unfilled: grid.unknown_positions(),
                },
            });
        }

        let mut sweeps = 0;
        let mut filled = 0;

        loop {
            if grid.is_complete() {
                tracing::info!(sweeps, filled, cells = grid.len(), "Grid fill complete");
                return Ok(FillReport {
                    sweeps,
                    filled,
                    status: FillStatus::Complete,
                });
            }

            if self.max_sweeps.is_some_and(|max| sweeps >= max) {
                return Ok(self.partial(grid, sweeps, filled, "Sweep limit reached"));
            }

            let progress = match self.sweep_mode {
                SweepMode::InPlace => self.sweep_in_place(grid)?,
                SweepMode::DoubleBuffered => self.sweep_buffered(grid)?,
            };
            sweeps += 1;
            filled += progress;

            tracing::debug!(
                sweep = sweeps,
                progress,
                remaining = grid.unknown_count(),
                "Sweep finished"
            );

            if progress == 0 {
                return Ok(self.partial(grid, sweeps, filled, "Fill stalled"));
            }
        }
    }

    fn partial(
        &self,
        grid: &AltitudeGrid,
        sweeps: usize,
        filled: usize,
        reason: &str,
    ) -> FillReport {
        let unfilled = grid.unknown_positions();
        tracing::warn!(
            sweeps,
            filled,
            unfilled = unfilled.len(),
            "{}, grid partially filled",
            reason
        );
        FillReport {
            sweeps,
            filled,
            status: FillStatus::Partial { unfilled },
        }
    }

    /// One sweep where each write is visible to the cells visited after it.
    fn sweep_in_place(&self, grid: &mut AltitudeGrid) -> Result<usize> {
        let mut progress = 0;
        for i in 0..grid.len() {
            if grid.get_index(i) != Some(None) {
                continue;
            }
            let hood = subgrid_at_index(grid, i)?;
            if let Some(value) = self.interpolator.interpolate(&hood)? {
                grid.set_index(i, value)?;
                progress += 1;
            }
        }
        Ok(progress)
    }

    /// One sweep reading only from the grid as it was when the sweep started.
    fn sweep_buffered(&self, grid: &mut AltitudeGrid) -> Result<usize> {
        let snapshot = grid.clone();
        let mut progress = 0;
        for (i, cell) in snapshot.cells().iter().enumerate() {
            if cell.is_some() {
                continue;
            }
            let hood = subgrid_at_index(&snapshot, i)?;
            if let Some(value) = self.interpolator.interpolate(&hood)? {
                grid.set_index(i, value)?;
                progress += 1;
            }
        }
        Ok(progress)
    }
}

/// Fill `grid` with a driver built from `config`.
pub fn fill(grid: &mut AltitudeGrid, config: &FillConfig) -> Result<FillReport> {
    ConvergenceDriver::new(config).fill(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(width: usize, height: usize, cells: Vec<Option<f64>>) -> AltitudeGrid {
        AltitudeGrid::from_cells(width, height, cells).unwrap()
    }

    #[test]
    fn test_three_corners_fill_completely() {
        let mut grid = grid_from(
            3,
            3,
            vec![
                Some(1.0), None, Some(1.0),
                None, None, None,
                Some(1.0), None, None,
            ],
        );
        let report = ConvergenceDriver::default().fill(&mut grid).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.filled, 6);
        assert!(grid.is_complete());
        // Constant input must interpolate to the same constant.
        for cell in grid.cells() {
            assert!((cell.unwrap() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_in_place_sees_same_sweep_writes() {
        // Top row known. (1,1) is filled first; in place, (2,1) then counts it
        // as a third known neighbour within the same sweep.
        let mut in_place = AltitudeGrid::new(3, 3).unwrap();
        for (x, z) in [(0, 0.0), (1, 3.0), (2, 6.0)] {
            in_place.set(x, 0, z).unwrap();
        }
        let mut buffered = in_place.clone();

        let one_sweep = |mode| FillConfig {
            sweep_mode: mode,
            max_sweeps: Some(1),
            ..FillConfig::default()
        };

        let report = fill(&mut in_place, &one_sweep(SweepMode::InPlace)).unwrap();
        assert_eq!(report.filled, 2);
        assert!(in_place.get(2, 1).unwrap().is_some());

        let report = fill(&mut buffered, &one_sweep(SweepMode::DoubleBuffered)).unwrap();
        assert_eq!(report.filled, 1);
        assert!(buffered.get(2, 1).unwrap().is_none());

        assert_eq!(in_place.get(1, 1).unwrap(), buffered.get(1, 1).unwrap());
    }

    #[test]
    fn test_double_buffered_is_mirror_symmetric() {
        let mut grid = AltitudeGrid::new(4, 3).unwrap();
        for (x, z) in [(0, 1.0), (1, 2.0), (2, 2.0), (3, 1.0)] {
            grid.set(x, 0, z).unwrap();
        }
        let config = FillConfig {
            sweep_mode: SweepMode::DoubleBuffered,
            ..FillConfig::default()
        };
        let report = fill(&mut grid, &config).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.sweeps, 4);

        for y in 0..3 {
            for x in 0..2 {
                let left = grid.get(x, y).unwrap().unwrap();
                let right = grid.get(3 - x, y).unwrap().unwrap();
                assert!((left - right).abs() < 1e-12, "asymmetry at row {}", y);
            }
        }
    }

    #[test]
    fn test_isolated_sample_stalls() {
        let mut grid = AltitudeGrid::new(4, 4).unwrap();
        grid.set(1, 1, 5.0).unwrap();

        let report = ConvergenceDriver::default().fill(&mut grid).unwrap();
        assert_eq!(report.sweeps, 1);
        assert_eq!(report.filled, 0);
        assert_eq!(report.unfilled_count(), 15);
        assert!(matches!(report.status, FillStatus::Partial { .. }));
        assert_eq!(grid.get(1, 1).unwrap(), Some(5.0));
    }

    #[test]
    fn test_all_sentinel_is_no_data() {
        let mut grid = AltitudeGrid::new(2, 3).unwrap();
        let report = ConvergenceDriver::default().fill(&mut grid).unwrap();

        assert_eq!(report.sweeps, 0);
        assert!(matches!(report.status, FillStatus::NoData { .. }));
        assert_eq!(report.unfilled_count(), 6);
    }

    #[test]
    fn test_already_complete_needs_no_sweep() {
        let mut grid = grid_from(2, 1, vec![Some(1.0), Some(2.0)]);
        let report = ConvergenceDriver::default().fill(&mut grid).unwrap();
        assert_eq!(report.sweeps, 0);
        assert_eq!(report.filled, 0);
        assert!(report.is_complete());
    }

    #[test]
    fn test_sweep_cap_yields_partial() {
        let mut grid = AltitudeGrid::new(8, 8).unwrap();
        for (x, y) in [(0, 0), (1, 0), (0, 1)] {
            grid.set(x, y, 2.0).unwrap();
        }
        let config = FillConfig {
            sweep_mode: SweepMode::DoubleBuffered,
            max_sweeps: Some(1),
            ..FillConfig::default()
        };
        let report = fill(&mut grid, &config).unwrap();

        assert_eq!(report.sweeps, 1);
        assert!(report.filled > 0);
        assert!(matches!(report.status, FillStatus::Partial { .. }));
        assert_eq!(report.unfilled_count(), grid.unknown_count());
    }

    #[test]
    fn test_report_serializes_status_tag() {
        let report = FillReport {
            sweeps: 2,
            filled: 4,
            status: FillStatus::Complete,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "complete");
        assert_eq!(json["sweeps"], 2);
    }
}

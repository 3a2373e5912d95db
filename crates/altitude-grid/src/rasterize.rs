//! Scatter-write of known samples into a grid.

use crate::config::OutOfBoundsPolicy;
use crate::error::{AltitudeGridError, Result};
use crate::grid::AltitudeGrid;
use crate::types::Sample;

/// Outcome of a scatter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterReport {
    /// Samples written, duplicates included.
    pub written: usize,
    /// Samples left out under [`OutOfBoundsPolicy::Skip`], in input order.
    pub skipped: Vec<Sample>,
}

/// Write every sample into `grid` in input order; later duplicates win.
///
/// Under [`OutOfBoundsPolicy::Reject`] all samples are checked before the
/// first write, so a failed call leaves the grid unchanged.
pub fn scatter(
    grid: &mut AltitudeGrid,
    samples: &[Sample],
    policy: OutOfBoundsPolicy,
) -> Result<ScatterReport> {
    let mut report = ScatterReport::default();

    if policy == OutOfBoundsPolicy::Reject {
        if let Some(bad) = samples.iter().find(|s| !grid.contains(s.x, s.y)) {
            return Err(AltitudeGridError::out_of_bounds(
                bad.x,
                bad.y,
                grid.width(),
                grid.height(),
            ));
        }
    }

    for sample in samples {
        if !grid.contains(sample.x, sample.y) {
            tracing::warn!(
                x = sample.x,
                y = sample.y,
                z = sample.z,
                width = grid.width(),
                height = grid.height(),
                "Skipping sample outside grid"
            );
            report.skipped.push(*sample);
            continue;
        }
        grid.set(sample.x, sample.y, sample.z)?;
        report.written += 1;
    }

    tracing::debug!(
        written = report.written,
        skipped = report.skipped.len(),
        known = grid.known_count(),
        "Scattered samples"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_writes_samples() {
        let mut grid = AltitudeGrid::new(3, 3).unwrap();
        let samples = [
            Sample::new(0, 1, 3.0),
            Sample::new(1, 0, 6.0),
            Sample::new(1, 2, 9.0),
        ];
        let report = scatter(&mut grid, &samples, OutOfBoundsPolicy::Reject).unwrap();

        assert_eq!(report.written, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(
            grid.cells(),
            &[None, Some(6.0), None, Some(3.0), None, None, None, Some(9.0), None]
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut grid = AltitudeGrid::new(2, 2).unwrap();
        let samples = [
            Sample::new(1, 1, 10.0),
            Sample::new(0, 0, 1.0),
            Sample::new(1, 1, -20.0),
        ];
        scatter(&mut grid, &samples, OutOfBoundsPolicy::Reject).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), Some(-20.0));
        assert_eq!(grid.known_count(), 2);
    }

    #[test]
    fn test_reject_leaves_grid_untouched() {
        let mut grid = AltitudeGrid::new(3, 3).unwrap();
        let samples = [Sample::new(0, 0, 1.0), Sample::new(3, 0, 2.0)];
        let err = scatter(&mut grid, &samples, OutOfBoundsPolicy::Reject).unwrap_err();

        assert_eq!(err, AltitudeGridError::out_of_bounds(3, 0, 3, 3));
        assert_eq!(grid.known_count(), 0);
    }

    #[test]
    fn test_skip_reports_out_of_bounds() {
        let mut grid = AltitudeGrid::new(3, 3).unwrap();
        let samples = [
            Sample::new(-1, 0, 1.0),
            Sample::new(2, 2, 2.0),
            Sample::new(0, 3, 3.0),
        ];
        let report = scatter(&mut grid, &samples, OutOfBoundsPolicy::Skip).unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(
            report.skipped,
            vec![Sample::new(-1, 0, 1.0), Sample::new(0, 3, 3.0)]
        );
        assert_eq!(grid.get(2, 2).unwrap(), Some(2.0));
    }

    #[test]
    fn test_empty_samples() {
        let mut grid = AltitudeGrid::new(2, 2).unwrap();
        let report = scatter(&mut grid, &[], OutOfBoundsPolicy::Reject).unwrap();
        assert_eq!(report, ScatterReport::default());
        assert_eq!(grid.known_count(), 0);
    }
}

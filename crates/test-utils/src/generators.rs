//! Test data generators for creating synthetic altitude data.
//!
//! These generators create predictable, verifiable patterns that can be used
//! across the test suite. Samples are `(x, y, z)` tuples and grids are
//! row-major `Vec<Option<f64>>` with `None` as the unknown sentinel.

/// Creates a fully known grid whose cell values equal their linear index.
///
/// Cell `(x, y)` holds `x + width * y`, which makes neighbourhood snapshots
/// easy to read back.
///
/// # Example
///
/// ```
/// use test_utils::linear_cells;
///
/// let cells = linear_cells(3, 4);
/// assert_eq!(cells.len(), 12);
/// assert_eq!(cells[4], Some(4.0)); // (1, 1)
/// ```
pub fn linear_cells(width: usize, height: usize) -> Vec<Option<f64>> {
    (0..width * height).map(|i| Some(i as f64)).collect()
}

/// Creates samples on a planar ramp `z = base + dx * x + dy * y`.
///
/// One sample every `step` cells in both directions, starting at the origin.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `step` - Sample spacing in cells (values below 1 are treated as 1)
/// * `base`, `dx`, `dy` - Plane coefficients
pub fn ramp_samples(
    width: usize,
    height: usize,
    step: usize,
    base: f64,
    dx: f64,
    dy: f64,
) -> Vec<(i64, i64, f64)> {
    let step = step.max(1);
    let mut samples = Vec::new();
    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            samples.push((x as i64, y as i64, base + dx * x as f64 + dy * y as f64));
        }
    }
    samples
}

/// Creates pseudo-random samples with unique coordinates inside the grid.
///
/// Uses a small linear congruential generator so the same seed always yields
/// the same samples. Altitudes fall in `[-100, 900)`, so negative values are
/// exercised. At most `width * height` samples are returned.
pub fn scattered_samples(
    width: usize,
    height: usize,
    count: usize,
    seed: u32,
) -> Vec<(i64, i64, f64)> {
    let total = width * height;
    let count = count.min(total);
    let mut taken = vec![false; total];
    let mut samples = Vec::with_capacity(count);
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);

    while samples.len() < count {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let i = (state >> 8) as usize % total;
        if taken[i] {
            continue;
        }
        taken[i] = true;
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        let z = ((state >> 8) % 1000) as f64 - 100.0;
        samples.push(((i % width) as i64, (i / width) as i64, z));
    }
    samples
}

/// Creates an all-unknown grid with known values at the given positions.
///
/// Positions outside the grid are ignored.
pub fn cells_with_known(
    width: usize,
    height: usize,
    known: &[(usize, usize, f64)],
) -> Vec<Option<f64>> {
    let mut cells = vec![None; width * height];
    for &(x, y, z) in known {
        if x < width && y < height {
            cells[x + width * y] = Some(z);
        }
    }
    cells
}

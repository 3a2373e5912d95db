//! Shared test utilities for the altitude-raster workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Sample and grid generators
//! - Literal fixtures for the rasterize/sample/interpolate scenarios
//! - Approximate float assertions
//! - Scratch files for tests that read or write JSON
//!
//! Generators return plain tuples and `Option<f64>` buffers so this crate
//! does not depend on `altitude-grid`; convert with `Sample::from`.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures, scattered_samples};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

use std::io::Write;

/// Write `contents` to a fresh temporary file and return its handle.
///
/// The file is deleted when the handle is dropped.
pub fn temp_file_with(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that two cell buffers agree: same unknown positions, known values
/// within `epsilon`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_cells_approx_eq;
///
/// assert_cells_approx_eq!(&[Some(1.0), None], &[Some(1.0000001), None], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_cells_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: &[Option<f64>] = $left;
        let right: &[Option<f64>] = $right;
        assert_eq!(left.len(), right.len(), "cell buffers differ in length");
        for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            match (l, r) {
                (Some(l), Some(r)) => {
                    if (l - r).abs() > $epsilon {
                        panic!("cell {} differs: {} vs {}", i, l, r);
                    }
                }
                (None, None) => {}
                _ => panic!("cell {} known-ness differs: {:?} vs {:?}", i, l, r),
            }
        }
    }};
}

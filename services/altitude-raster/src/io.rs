//! JSON input and output for the command-line harness.
//!
//! Input is an array of already-scaled samples: `[{"x": 0, "y": 1, "z": 3.0}, ...]`.
//! Output is a single document describing the filled raster; unknown cells
//! are written as `null`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use altitude_grid::{CellPosition, Extrema, FillStatus, RasterOutput, Sample};
use anyhow::{Context, Result};
use serde::Serialize;

/// Parse a JSON array of samples.
pub fn parse_samples(json: &str) -> Result<Vec<Sample>> {
    serde_json::from_str(json).context("Failed to parse samples JSON")
}

/// Read samples from a file, or from stdin when `path` is `-`.
pub fn read_samples(path: &Path) -> Result<Vec<Sample>> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read samples from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read samples from {}", path.display()))?
    };
    parse_samples(&json)
}

/// Serializable view of a rasterization run.
#[derive(Debug, Serialize)]
pub struct RasterDocument {
    pub width: usize,
    pub height: usize,
    pub status: &'static str,
    pub sweeps: usize,
    pub filled: usize,
    pub skipped: usize,
    pub extrema: Option<Extrema>,
    pub cells: Vec<Option<f64>>,
    pub unfilled: Vec<CellPosition>,
}

impl RasterDocument {
    pub fn from_output(output: &RasterOutput) -> Self {
        let status = match output.fill.status {
            FillStatus::Complete => "complete",
            FillStatus::Partial { .. } => "partial",
            FillStatus::NoData { .. } => "no_data",
        };

        Self {
            width: output.grid.width(),
            height: output.grid.height(),
            status,
            sweeps: output.fill.sweeps,
            filled: output.fill.filled,
            skipped: output.scatter.skipped.len(),
            extrema: output.extrema().ok(),
            cells: output.grid.cells().to_vec(),
            unfilled: output.fill.unfilled_positions().to_vec(),
        }
    }
}

/// Write the document as pretty JSON to `path`, or to stdout when `None`.
pub fn write_document(doc: &RasterDocument, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    match path {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write raster to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

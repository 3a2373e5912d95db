//! Altitude raster command-line harness.
//!
//! Reads altitude samples that an upstream stage has already projected and
//! rounded to integer pixel coordinates, then:
//! - scatters them into a `width x height` grid
//! - fills the gaps by neighbourhood weighted averaging
//! - writes the raster, its extrema and any unfilled cells as JSON
//!
//! Partially filled grids are written like complete ones; the `status` field
//! tells the renderer which cells to flag as "no data".

mod io;

use std::path::PathBuf;

use altitude_grid::{rasterize, FillConfig, FillStatus, OutOfBoundsPolicy, SweepMode};
use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::io::{read_samples, write_document, RasterDocument};

#[derive(Parser, Debug)]
#[command(name = "altitude-raster")]
#[command(about = "Rasterize scaled altitude samples and fill the gaps")]
struct Args {
    /// JSON file with an array of {x, y, z} samples ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Grid width in cells
    #[arg(long)]
    width: usize,

    /// Grid height in cells
    #[arg(long)]
    height: usize,

    /// Output file for the raster JSON (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sweep mode: in_place or double_buffered (overrides ALTITUDE_SWEEP_MODE)
    #[arg(long)]
    sweep_mode: Option<String>,

    /// Skip samples outside the grid instead of failing
    #[arg(long)]
    skip_out_of_bounds: bool,

    /// Maximum number of fill sweeps (overrides ALTITUDE_MAX_SWEEPS)
    #[arg(long)]
    max_sweeps: Option<usize>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    /// Environment configuration with command-line overrides applied.
    fn fill_config(&self) -> FillConfig {
        let mut config = FillConfig::from_env();

        if let Some(mode) = &self.sweep_mode {
            config.sweep_mode = SweepMode::from_str(mode);
        }
        if self.skip_out_of_bounds {
            config.out_of_bounds = OutOfBoundsPolicy::Skip;
        }
        if self.max_sweeps.is_some() {
            config.max_sweeps = self.max_sweeps;
        }

        config
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so the raster can be piped from stdout.
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    let config = args.fill_config();
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    info!(
        width = args.width,
        height = args.height,
        sweep_mode = %config.sweep_mode,
        out_of_bounds = %config.out_of_bounds,
        "Starting altitude rasterization"
    );

    let samples = read_samples(&args.input)?;
    info!(count = samples.len(), "Loaded samples");

    let output = rasterize(args.width, args.height, &samples, &config)?;

    match &output.fill.status {
        FillStatus::Complete => info!(
            sweeps = output.fill.sweeps,
            filled = output.fill.filled,
            "Raster fully interpolated"
        ),
        FillStatus::Partial { unfilled } => warn!(
            sweeps = output.fill.sweeps,
            filled = output.fill.filled,
            unfilled = unfilled.len(),
            "Raster partially interpolated, unfilled cells are written as null"
        ),
        FillStatus::NoData { .. } => warn!("No samples inside the grid, raster is empty"),
    }

    let doc = RasterDocument::from_output(&output);
    write_document(&doc, args.output.as_deref())?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), "Raster written");
    }

    Ok(())
}

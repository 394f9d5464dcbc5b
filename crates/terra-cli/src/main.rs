//! # Terra
//!
//! Command-line demo for Project Terra.
//!
//! Builds a terrain grid, prints a layer, applies the demo update, prints the
//! layer again, and lists the neighborhood of the updated cell.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod inspect;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use terra_world::{CellUpdate, GridConfig, TerrainGrid, TerrainType};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "terra")]
#[command(about = "Build and inspect a 3D terrain grid", long_about = None)]
struct Args {
    /// Cells along X
    #[arg(long, default_value_t = 3)]
    width: i32,

    /// Cells along Y
    #[arg(long, default_value_t = 3)]
    depth: i32,

    /// Cells along Z (layers)
    #[arg(long, default_value_t = 2)]
    layers: i32,

    /// Starting height for every cell (overrides the config file)
    #[arg(long)]
    default_height: Option<f32>,

    /// Grid configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layer to print
    #[arg(short = 'z', long, default_value_t = 0)]
    layer: i32,

    /// Cell to update, as x,y,z
    #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = [1, 1, 0])]
    target: Vec<i32>,

    /// New height for the target cell
    #[arg(long, default_value_t = 5.0)]
    height: f32,

    /// Terrain type forced onto the target cell after the height change
    #[arg(long, default_value = "mountain")]
    terrain: String,
}

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("terra=info".parse()?))
        .init();

    let args = Args::parse();
    info!("Terra {}", env!("CARGO_PKG_VERSION"));

    let mut config = args
        .config
        .as_deref()
        .map_or_else(GridConfig::default, GridConfig::load_from);
    if let Some(height) = args.default_height {
        config.default_height = height;
    }

    let mut grid = TerrainGrid::new(args.width, args.depth, args.layers, &config)
        .context("Failed to create terrain grid")?;
    info!(
        "Created {}x{}x{} grid ({} cells)",
        args.width,
        args.depth,
        args.layers,
        grid.len()
    );

    print_slice(&grid, args.layer)?;

    let terrain: TerrainType = args.terrain.parse()?;
    let [x, y, z] = args.target[..] else {
        bail!("--target takes exactly three coordinates, got {:?}", args.target);
    };
    grid.update_cell(
        x,
        y,
        z,
        CellUpdate::height(args.height).with_terrain_type(terrain),
    )
    .with_context(|| format!("Failed to update cell ({x}, {y}, {z})"))?;
    info!("Updated ({x}, {y}, {z}): height={}, terrain={terrain}", args.height);

    print_slice(&grid, args.layer)?;

    let center = grid.get_cell(x, y, z)?;
    let neighbors = grid.neighbors(x, y, z)?;
    print!("{}", inspect::format_neighbors(center, &neighbors));

    Ok(())
}

fn print_slice(grid: &TerrainGrid, z: i32) -> Result<()> {
    let rows = grid
        .slice(z)
        .with_context(|| format!("Failed to read layer {z}"))?;
    println!("{}", inspect::format_slice(z, &rows));
    Ok(())
}

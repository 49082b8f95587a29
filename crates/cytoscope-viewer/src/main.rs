//! Cytoscope, an interactive plant cell explorer
//!
//! Run with: cargo run -p cytoscope-viewer
//!
//! Examples:
//!   cargo run -p cytoscope-viewer -- --catalog cells/plant.toml
//!   cargo run -p cytoscope-viewer -- --no-boundary --no-floating

mod app;

use anyhow::Context;
use clap::Parser;
use cytoscope_core::OrganelleCatalog;
use std::path::PathBuf;

/// Interactive plant cell explorer
#[derive(Parser, Debug)]
#[command(name = "cytoscope")]
#[command(about = "Explore a 3D plant cell, one organelle at a time")]
struct Args {
    /// Organelle catalog to load, JSON or TOML; the built-in plant cell otherwise
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Start with the cell boundary hidden
    #[arg(long)]
    no_boundary: bool,

    /// Disable the floating animation
    #[arg(long)]
    no_floating: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => OrganelleCatalog::from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => OrganelleCatalog::builtin(),
    };

    let options = app::WindowOptions {
        width: args.width,
        height: args.height,
        show_boundary: !args.no_boundary,
        floating: !args.no_floating,
    };

    app::run(catalog, options);
    Ok(())
}

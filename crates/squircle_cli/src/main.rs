//! Squircle CLI
//!
//! Generate squircle outlines as SVG documents, raw path data, or a geometry
//! report.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use squircle_core::{inspect, CornerRadius, OutlineCache, Size, Squircle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod render;

use config::{ShapeConfig, SquircleConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "squircle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Squircle outline generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./squircle.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a standalone SVG document
    Svg {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print SVG path data only
    Path {
        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Print the normalized radii, edge spaces and corner parameters
    Inspect {
        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Write a default squircle.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Shape flags shared by every outline command; each overrides the config
#[derive(Args, Debug, Default)]
struct ShapeArgs {
    /// Box width
    #[arg(long)]
    width: Option<f64>,

    /// Box height
    #[arg(long)]
    height: Option<f64>,

    /// Radius for every corner
    #[arg(short, long)]
    radius: Option<f64>,

    #[arg(long)]
    top_left: Option<f64>,

    #[arg(long)]
    top_right: Option<f64>,

    #[arg(long)]
    bottom_right: Option<f64>,

    #[arg(long)]
    bottom_left: Option<f64>,

    /// Corner smoothing in [0, 1]
    #[arg(short, long)]
    smoothing: Option<f64>,
}

impl ShapeArgs {
    /// Merge flags over the config and validate the result
    fn resolve(&self, config: &ShapeConfig) -> Result<(Size, Squircle)> {
        let width = self.width.unwrap_or(config.width);
        let height = self.height.unwrap_or(config.height);
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            anyhow::bail!(
                "Invalid size {} x {}: expected finite, non-negative values",
                width,
                height
            );
        }

        // Per-corner values beat the uniform radius, and flags beat the config
        let uniform = self.radius.unwrap_or(config.radius);
        let radii = CornerRadius::new(
            self.top_left.or(config.top_left).unwrap_or(uniform),
            self.top_right.or(config.top_right).unwrap_or(uniform),
            self.bottom_right.or(config.bottom_right).unwrap_or(uniform),
            self.bottom_left.or(config.bottom_left).unwrap_or(uniform),
        );

        let smoothing = self.smoothing.unwrap_or(config.smoothing);
        let squircle = Squircle::try_new(radii, smoothing)?;

        Ok((Size::new(width, height), squircle))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Svg { shape, output } => {
            cmd_svg(&load_config(config)?, &shape, output.as_deref())
        }
        Commands::Path { shape } => cmd_path(&load_config(config)?, &shape),
        Commands::Inspect { shape } => cmd_inspect(&load_config(config)?, &shape),
        Commands::Init { force } => cmd_init(Path::new("."), force),
    }
}

fn load_config(path: Option<&Path>) -> Result<SquircleConfig> {
    match path {
        Some(path) => SquircleConfig::load(path),
        None => SquircleConfig::load_from_dir(Path::new(".")),
    }
}

fn cmd_svg(config: &SquircleConfig, shape: &ShapeArgs, output: Option<&Path>) -> Result<()> {
    let (size, squircle) = shape.resolve(&config.shape)?;
    let cache = OutlineCache::with_capacity(config.cache.capacity)?;

    let outline = squircle.outline_with(size, &cache);
    let svg = render::svg_document(&outline, &config.render);
    debug!(stats = ?cache.stats(), "outline cache");

    match output {
        Some(path) => {
            fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

fn cmd_path(config: &SquircleConfig, shape: &ShapeArgs) -> Result<()> {
    let (size, squircle) = shape.resolve(&config.shape)?;
    let cache = OutlineCache::with_capacity(config.cache.capacity)?;

    let outline = squircle.outline_with(size, &cache);
    println!("{}", outline.to_path().to_svg_path_data());
    Ok(())
}

fn cmd_inspect(config: &SquircleConfig, shape: &ShapeArgs) -> Result<()> {
    let (size, squircle) = shape.resolve(&config.shape)?;

    let geometry = inspect(size, squircle.radii, squircle.smoothing);
    print!("{}", render::inspect_report(&geometry));
    Ok(())
}

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    fs::write(&path, SquircleConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created {}", path.display());
    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use shape2sdf::config::{FileConfig, defaults};
use shape2sdf::field::{GridSpec, write_grid_file, write_point_distances_file};
use shape2sdf::shapefile::{read_points, read_shape};

/// Generate signed distance fields from 2D polygonal shape descriptions
///
/// Examples:
///   # Sample a 64x64 grid over [0, 1) (the defaults)
///   shape2sdf glyph.shape -o glyph.sdf
///
///   # Widen the sampling window and raise the resolution
///   shape2sdf glyph.shape --xymin -2.0 --xymax 2.0 --res 256
///
///   # Evaluate explicit query points instead of a grid
///   shape2sdf glyph.shape --points queries.txt -o distances.txt
///
///   # Use a config file
///   shape2sdf glyph.shape --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "shape2sdf")]
#[command(version, about, long_about = None)]
struct Args {
    /// Shape description file (boundary count, then per boundary:
    /// point count, hole flag, and the point list)
    shape: PathBuf,

    /// Path to config file (optional, auto-searches shape2sdf.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Query point list file; switches from grid mode to point-list mode
    #[arg(short = 'p', long)]
    points: Option<PathBuf>,

    /// Output file path (defaults to {shape stem}.sdf)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Lower corner of the square sampling window (grid mode)
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    xymin: f64,

    /// Upper bound of the sampling window, itself never sampled (grid mode)
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    xymax: f64,

    /// Samples per axis (grid mode)
    #[arg(long, default_value = "64")]
    res: u32,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let xymin = if args.xymin != defaults::XYMIN {
        args.xymin
    } else {
        file_config
            .as_ref()
            .map(|c| c.xymin)
            .unwrap_or(defaults::XYMIN)
    };
    let xymax = if args.xymax != defaults::XYMAX {
        args.xymax
    } else {
        file_config
            .as_ref()
            .map(|c| c.xymax)
            .unwrap_or(defaults::XYMAX)
    };
    let res = if args.res != defaults::RES {
        args.res
    } else {
        file_config.as_ref().map(|c| c.res).unwrap_or(defaults::RES)
    };
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));

    println!("shape2sdf - Signed Distance Field Generator");
    println!("===========================================");
    println!();

    let output_path = output.unwrap_or_else(|| {
        let stem = args
            .shape
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "field".to_string());
        PathBuf::from(format!("{}.sdf", stem))
    });

    if verbose {
        println!("Configuration:");
        println!("  Shape file: {}", args.shape.display());
        if let Some(ref p) = args.points {
            println!("  Query points: {}", p.display());
        } else {
            println!("  Window: [{}, {})", xymin, xymax);
            println!("  Resolution: {}x{}", res, res);
        }
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner("Loading shape description...");
    let start = Instant::now();
    let shape = read_shape(&args.shape)
        .with_context(|| format!("Could not read shape from {}", args.shape.display()))?;
    spinner.finish_with_message(format!(
        "Loaded {} boundaries, {} points [{:.1}s]",
        shape.boundaries.len(),
        shape.num_points(),
        start.elapsed().as_secs_f32()
    ));

    if let Some(ref points_path) = args.points {
        let spinner = create_spinner("Loading query points...");
        let start = Instant::now();
        let points = read_points(points_path)
            .with_context(|| format!("Could not read points from {}", points_path.display()))?;
        spinner.finish_with_message(format!(
            "Loaded {} query points [{:.1}s]",
            points.len(),
            start.elapsed().as_secs_f32()
        ));

        let spinner = create_spinner("Computing distances...");
        let start = Instant::now();
        write_point_distances_file(&output_path, &shape, &points)
            .context("Failed to write distance file")?;
        spinner.finish_with_message(format!(
            "Wrote {} distances [{:.1}s]",
            points.len(),
            start.elapsed().as_secs_f32()
        ));
    } else {
        let spec = GridSpec::new(xymin, xymax, res);
        spec.validate().context("Bad grid dimensions requested")?;

        let spinner = create_spinner("Sampling distance field...");
        let start = Instant::now();
        write_grid_file(&output_path, &shape, &spec).context("Failed to write field file")?;
        spinner.finish_with_message(format!(
            "Sampled {}x{} grid over [{}, {}) [{:.1}s]",
            res,
            res,
            xymin,
            xymax,
            start.elapsed().as_secs_f32()
        ));
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_path.display());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Instant;

use waterfront::config::FileConfig;
use waterfront::generator::WaterGenerator;
use waterfront::output::{OutputFormat, PrintSize, read_water_path, write_water};

/// Generate a waterfront polygon for a square city map region
///
/// Examples:
///   # Random water body on the default 25-unit region
///   waterfront
///
///   # Reproducible result on a larger region, as a printable slab
///   waterfront -r 60 --seed 42 -o water.stl
///
///   # Close a hand-drawn waterline instead of walking one
///   waterfront --water-path shore.json -o water.json
#[derive(Parser, Debug)]
#[command(name = "waterfront")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches waterfront.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Half-width of the square region
    #[arg(short = 'r', long)]
    radius: Option<f64>,

    /// Random seed; a fresh one is drawn and reported when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output file, .json or .stl (defaults to water.json)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// JSON file with a fixed waterline as [[x, y], ...]; skips the random walk
    #[arg(long)]
    water_path: Option<PathBuf>,

    /// Physical size in mm of the square for STL output
    #[arg(short = 's', long)]
    size: Option<f32>,

    /// Water slab thickness in mm for STL output
    #[arg(long)]
    water_height: Option<f32>,

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
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    init_logging(verbose);

    let radius = args.radius.unwrap_or(file_config.radius);
    let seed = args
        .seed
        .or(file_config.seed)
        .unwrap_or_else(rand::random::<u64>);
    let output = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from("water.json"));
    let water_path = args.water_path.clone().or_else(|| file_config.water_path.clone());
    let print = PrintSize {
        size_mm: args.size.unwrap_or(file_config.size_mm),
        water_height_mm: args.water_height.unwrap_or(file_config.water_height_mm),
    };

    let format = OutputFormat::from_path(&output)?;

    println!("waterfront - Water Polygon Generator");
    println!("====================================");
    println!();

    if verbose {
        let wl = &file_config.waterline;
        println!("Configuration:");
        println!("  Radius: {}", radius);
        println!("  Seed: {}", seed);
        println!("  Step range: {} - {}", wl.min_step, wl.max_step);
        println!("  Minimum length: {} x radius", wl.min_length_ratio);
        println!("  Attempt cap: {} per step", wl.max_attempts);
        println!("  Backtrack budget: {}", wl.max_backtracks);
        println!("  Path retries: {}", wl.max_path_retries);
        if let Some(ref p) = water_path {
            println!("  Water path: {}", p.display());
        }
        println!("  Output: {} ({:?})", output.display(), format);
        println!();
    }

    let mut generator = WaterGenerator::new(radius, file_config.waterline.clone());
    if let Some(ref p) = water_path {
        let points = read_water_path(p)?;
        println!("Loaded fixed waterline with {} points", points.len());
        generator = generator.with_water_path(points);
    }

    let spinner = create_spinner("Generating waterline...");
    let start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let body = generator
        .generate(&mut rng)
        .context("Failed to generate water polygon")?;
    spinner.finish_with_message(format!(
        "Waterline: {} segments, length {:.1} [{:.2}s]",
        body.waterline.len(),
        body.waterline_length(),
        start.elapsed().as_secs_f32()
    ));

    let region_area = (2.0 * radius).powi(2);
    println!(
        "Polygon: {} points, area {:.1} ({:.1}% of region)",
        body.polygon.len(),
        body.area(),
        100.0 * body.area() / region_area
    );
    if verbose {
        println!("  Border closing segments: {}", body.closing.len());
        println!(
            "  Winding: {}",
            if body.is_clockwise() {
                "clockwise"
            } else {
                "counter-clockwise"
            }
        );
        println!(
            "  Simple: {}",
            if body.polygon.is_simple() { "yes" } else { "NO" }
        );
    }

    let spinner = create_spinner("Writing output...");
    let start = Instant::now();
    write_water(&output, &body, Some(seed), print).context("Failed to write output")?;
    let bytes = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    let detail = match format {
        OutputFormat::Json => format!("JSON ({:.1} KB)", bytes as f64 / 1024.0),
        OutputFormat::Stl => format!(
            "STL, {} triangles ({:.1} KB)",
            bytes.saturating_sub(84) / 50,
            bytes as f64 / 1024.0
        ),
    };
    spinner.finish_with_message(format!(
        "Wrote {} [{:.2}s]",
        detail,
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.2}s",
        total_start.elapsed().as_secs_f32()
    );
    println!("Output: {}", output.display());
    println!("Seed: {} (pass --seed {} to reproduce)", seed, seed);

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

// starfield-preview - Render one starfield frame to a grayscale PNG
//
// Offline tool for tuning the backdrop without a browser. Runs the same
// generator, spin and projection the wasm build uses.
//
// Usage: cargo run --bin starfield-preview -- --out stars.png [--time 12.5] [--seed 7]

use std::path::PathBuf;

use clap::Parser;
use portfolio_engine::{EngineConfig, EngineError, Result, StarField};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
#[command(name = "starfield-preview", version)]
struct Args {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Engine config JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Override the configured point count.
    #[arg(long)]
    count: Option<usize>,

    /// Override the configured sphere radius.
    #[arg(long)]
    radius: Option<f32>,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds of spin before the frame is captured.
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.time.is_finite() || args.time < 0.0 {
        return Err(EngineError::config(format!("--time must be finite and >= 0, got {}", args.time)));
    }

    let mut cfg = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| EngineError::output(format!("read {}: {e}", path.display())))?;
            EngineConfig::from_json(&json)?
        }
        None => EngineConfig::default(),
    };
    if let Some(count) = args.count { cfg.starfield.count = count; }
    if let Some(radius) = args.radius { cfg.starfield.radius = radius; }

    let seed = args.seed.unwrap_or_else(portfolio_engine::entropy_seed);
    println!(
        "Rendering {} points (r={}, seed={}) at {}x{}, t={}s...",
        cfg.starfield.count, cfg.starfield.radius, seed, args.width, args.height, args.time
    );

    let mut field = StarField::new(cfg.starfield, &mut SmallRng::seed_from_u64(seed))?;

    field.advance(args.time);

    field.render(args.width, args.height);
    let lit = field.output().iter().filter(|&&b| b > 0).count();
    println!("  {} pixels lit", lit);

    let img = image::GrayImage::from_raw(args.width, args.height, field.output().to_vec())
        .ok_or_else(|| EngineError::output("output buffer does not match image size"))?;
    img.save(&args.out)
        .map_err(|e| EngineError::output(format!("write {}: {e}", args.out.display())))?;

    println!("Done! Wrote {}", args.out.display());
    Ok(())
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use windgill::series::SampleSeries;
use windgill::simulation::{WindDayConfig, generate_direction_series, generate_speed_series};

#[derive(Parser, Debug)]
#[command(name = "generate_samples")]
#[command(about = "Generate a synthetic day of wind speed/direction samples")]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "data/synthetic")]
    output_dir: PathBuf,

    /// Day start as UTC epoch seconds (must be a midnight)
    #[arg(long, default_value_t = 1_700_006_400)]
    day: i64,

    /// Covered span in seconds
    #[arg(long, default_value_t = 86_400.0)]
    duration: f64,

    /// Seed for reproducibility
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Prevailing wind speed in m/s
    #[arg(long, default_value_t = 4.0)]
    mean_speed: f64,

    /// Gust standard deviation in m/s
    #[arg(long, default_value_t = 0.8)]
    speed_sigma: f64,

    /// Prevailing direction in degrees
    #[arg(long, default_value_t = 225.0)]
    mean_direction: f64,

    /// Direction drift standard deviation in degrees per sample
    #[arg(long, default_value_t = 3.0)]
    direction_sigma: f64,

    /// Sampling interval in seconds
    #[arg(long, default_value_t = 1.0)]
    interval: f64,

    /// Fraction of readings dropped (emitted as the negative sentinel)
    #[arg(long, default_value_t = 0.01)]
    dropout: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = WindDayConfig {
        day: args.day as f64,
        duration: args.duration,
        seed: args.seed,
        mean_speed: args.mean_speed,
        speed_sigma: args.speed_sigma,
        mean_direction: args.mean_direction,
        direction_sigma: args.direction_sigma,
        interval: args.interval,
        dropout: args.dropout,
    };

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    let speed = generate_speed_series(&config)?;
    let direction = generate_direction_series(&config)?;

    write_series(&args.output_dir.join("speed.json"), &speed)?;
    write_series(&args.output_dir.join("direction.json"), &direction)?;

    println!(
        "Wrote {} speed and {} direction samples to {}",
        speed.len(),
        direction.len(),
        args.output_dir.display()
    );
    Ok(())
}

fn write_series(path: &PathBuf, series: &SampleSeries) -> Result<()> {
    let json = serde_json::to_string_pretty(series.samples())?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

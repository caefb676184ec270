use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use rolling_stats::Stats;

use windgill::config::ExportConfig;
use windgill::constants::SECONDS_PER_DAY;
use windgill::output;
use windgill::report::ReportModel;
use windgill::series::{Sample, SampleSeries};

#[derive(Parser, Debug)]
#[command(name = "windgill")]
#[command(about = "Export a daily wind report with rolling averages from recorded samples", long_about = None)]
struct Args {
    /// JSON file with recorded wind speed samples (m/s)
    #[arg(long)]
    speed: PathBuf,

    /// JSON file with recorded wind direction samples (degrees)
    #[arg(long)]
    direction: PathBuf,

    /// Day to export (DD-MM-YYYY); defaults to the full recorded range
    #[arg(short, long)]
    day: Option<String>,

    /// Directory for the exported CSV file
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// TOML configuration file overriding windows and deadband
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the CSV file and print the console summary only
    #[arg(long)]
    no_csv: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.config {
        Some(path) => ExportConfig::from_toml_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ExportConfig::default(),
    };

    let mut speed = load_series(&args.speed)?;
    let mut direction = load_series(&args.direction)?;

    if let Some(day) = &args.day {
        let start = parse_day(day)?;
        speed = speed.clip(start, start + SECONDS_PER_DAY);
        direction = direction.clip(start, start + SECONDS_PER_DAY);
    }

    report_availability("Wind speed", &speed);
    report_availability("Direction", &direction);

    eprint!("Calculation of rolling averages :   0%");
    let report = ReportModel::build_with_progress(&speed, &direction, &config, |pct| {
        eprint!("\rCalculation of rolling averages : {pct:3}%");
        std::io::stderr().flush().ok();
    })
    .context("missing essential data, aborting this day's export")?;
    eprintln!("\rCalculation of rolling averages : Done!");

    for line in output::summary_lines(&report) {
        println!("{line}");
    }

    if !args.no_csv {
        let path = output::export_to_file(&report, &args.output_dir)
            .with_context(|| format!("writing report to {}", args.output_dir.display()))?;
        println!("File {} created", path.display());
    }

    Ok(())
}

fn load_series(path: &Path) -> anyhow::Result<SampleSeries> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading samples from {}", path.display()))?;
    let samples: Vec<Sample> = serde_json::from_str(&text)
        .with_context(|| format!("parsing samples from {}", path.display()))?;

    let mut stats: Stats<f64> = Stats::new();
    for sample in samples.iter().filter(|s| s.is_valid()) {
        stats.update(sample.value);
    }
    log::info!(
        "{}: {} samples loaded (mean {:.2}, min {:.2}, max {:.2})",
        path.display(),
        samples.len(),
        stats.mean,
        stats.min,
        stats.max
    );

    Ok(SampleSeries::new(samples))
}

fn report_availability(name: &str, series: &SampleSeries) {
    match (series.first_start(), series.last_end()) {
        (Some(start), Some(end)) => println!(
            "{} data available from {} to {}",
            name,
            output::clock_time(start),
            output::clock_time(end)
        ),
        _ => println!("{name} data: no samples in the selected range"),
    }
}

fn parse_day(text: &str) -> anyhow::Result<f64> {
    let date = NaiveDate::parse_from_str(text, "%d-%m-%Y")
        .with_context(|| format!("invalid day '{text}', expected DD-MM-YYYY"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64)
}

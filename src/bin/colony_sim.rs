//! Headless colony runner
//!
//! Runs one colony to completion and prints the outcome as JSON or text.

use ant_colony::colony::simulation::{DEFAULT_DAYS, DEFAULT_NAME};
use ant_colony::colony::{simulate, RunOptions};
use ant_colony::core::config::SimulationConfig;
use ant_colony::core::error::Result;
use ant_colony::report;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless Colony Runner - batch colony simulations
#[derive(Parser, Debug)]
#[command(name = "colony_sim")]
#[command(about = "Run an ant colony simulation and print the results")]
struct Args {
    /// Number of days to simulate
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    days: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding the default configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Colony name
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Write the output here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "ant_colony=debug" } else { "ant_colony=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let output = simulate(
        config.clone(),
        RunOptions {
            name: args.name,
            days: args.days,
            seed,
        },
    )?;

    let rendered = match args.format.as_str() {
        "json" => output.to_json(),
        "text" => render_text(&output, &config),
        other => {
            eprintln!("Unknown format '{}', defaulting to text", other);
            render_text(&output, &config)
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            eprintln!("Output written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render_text(output: &ant_colony::colony::SimulationOutput, config: &SimulationConfig) -> String {
    let mut s = String::new();
    s.push_str(&format!("Seed: {}\n", output.seed));
    s.push_str(&output.summary());
    s.push('\n');
    s.push_str("\nDay  Workers  Soldiers  Larvae  Pupae  Food  Deaths  Attack\n");
    for day in &output.days {
        s.push_str(&format!(
            "{:>3}  {:>7}  {:>8}  {:>6}  {:>5}  {:>4}  {:>6}  {}\n",
            day.day,
            day.workers,
            day.soldiers,
            day.larvae,
            day.pupae,
            day.food,
            day.deaths,
            if day.attacked { "yes" } else { "" }
        ));
    }
    s.push_str(&report::final_statistics(&output.statistics));
    s.push_str(&report::demographics(&output.statistics, config));
    s
}

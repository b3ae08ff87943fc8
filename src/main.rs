//! Ant Colony - interactive entry point
//!
//! Asks for a colony name and run settings, then narrates the colony day by
//! day. In manual mode each day waits for Enter.

use ant_colony::colony::simulation::{DEFAULT_DAYS, DEFAULT_NAME};
use ant_colony::colony::Colony;
use ant_colony::core::config::SimulationConfig;
use ant_colony::core::error::Result;
use ant_colony::report;

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const AUTO_MODE_PAUSE: Duration = Duration::from_millis(500);

struct RunSettings {
    days: u32,
    auto_mode: bool,
    detailed_stats: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            auto_mode: false,
            detailed_stats: true,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ant_colony=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = SimulationConfig::default();
    println!("{}", report::welcome_banner(&config));

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e);
    }

    let name = prompt("\nColony name: ")?;
    let name = if name.is_empty() { DEFAULT_NAME.to_string() } else { name };

    let settings = match read_settings()? {
        Some(settings) => settings,
        None => {
            println!("Invalid input, using default values");
            RunSettings::default()
        }
    };
    config.show_detailed_stats = settings.detailed_stats;

    println!("\nStarting colony '{}' for {} days...", name, settings.days);
    let seed = rand::random();
    tracing::info!("Running with seed {}", seed);
    let mut colony = Colony::new(name.clone(), config, seed)?;

    for day in 0..settings.days {
        println!("{}", report::day_header(colony.day + 1));
        for event in colony.simulate_day() {
            println!("{}", report::render_tick_event(&event));
        }
        println!("{}", report::day_status(&colony, colony.config.show_detailed_stats));

        if !colony.is_alive() {
            println!("\nColony '{}' perished on day {}!", name, colony.day);
            break;
        }

        if settings.auto_mode {
            std::thread::sleep(AUTO_MODE_PAUSE);
        } else if day + 1 < settings.days {
            print!("\nPress Enter for the next day...");
            io::stdout().flush()?;
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                println!("\n\nSimulation interrupted");
                break;
            }
        }
    }

    let stats = colony.statistics();
    println!("{}", report::final_statistics(&stats));
    println!("{}", report::demographics(&stats, &colony.config));

    if colony.is_alive() {
        println!("\nColony '{}' survived!", name);
    } else {
        println!("\nColony '{}' did not survive.", name);
    }

    let save = prompt("\nSave statistics to a file? (y/n): ")?;
    if save.eq_ignore_ascii_case("y") {
        let file_name = report::export_file_name(&name);
        match report::write_export(Path::new(&file_name), &stats) {
            Ok(()) => println!("Statistics saved to {}", file_name),
            Err(e) => println!("Could not save statistics: {}", e),
        }
    }

    Ok(())
}

/// Print `message` and read one trimmed line; empty on end of input
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Run length and display options; `None` when an answer is malformed
fn read_settings() -> Result<Option<RunSettings>> {
    let days = prompt(&format!("How many days to simulate? (default {}): ", DEFAULT_DAYS))?;
    let days = if days.is_empty() {
        DEFAULT_DAYS
    } else {
        match days.parse() {
            Ok(days) => days,
            Err(_) => return Ok(None),
        }
    };

    let auto_mode = prompt("Automatic mode? (y/n, default n): ")?.to_lowercase();
    let detailed = prompt("Show detailed death statistics? (y/n, default y): ")?.to_lowercase();

    Ok(Some(RunSettings {
        days,
        auto_mode: auto_mode == "y",
        detailed_stats: detailed != "n",
    }))
}

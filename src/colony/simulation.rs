//! Batch simulation loop

use crate::colony::nest::Colony;
use crate::colony::output::{DaySummary, SimulationOutput};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;

/// Default colony name
pub const DEFAULT_NAME: &str = "Antlantis";
/// Default run length in days
pub const DEFAULT_DAYS: u32 = 30;

/// What to run, as opposed to how the colony behaves
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub name: String,
    pub days: u32,
    pub seed: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            days: DEFAULT_DAYS,
            seed: 12345,
        }
    }
}

/// Run a colony for up to `options.days` days
///
/// Stops early on the day the colony dies.
pub fn simulate(config: SimulationConfig, options: RunOptions) -> Result<SimulationOutput> {
    let start = std::time::Instant::now();

    let mut colony = Colony::new(options.name, config, options.seed)?;
    let mut days = Vec::with_capacity(options.days as usize);

    while colony.day < options.days && colony.is_alive() {
        colony.simulate_day();
        days.push(summarize_day(&colony));
    }

    let survived = colony.is_alive();
    if survived {
        tracing::info!("Colony '{}' survived {} days", colony.name, colony.day);
    } else {
        tracing::warn!("Colony '{}' perished on day {}", colony.name, colony.day);
    }

    Ok(SimulationOutput::new(
        options.seed,
        options.days,
        survived,
        start.elapsed(),
        colony.statistics(),
        days,
        colony.death_stats.records().to_vec(),
    ))
}

/// One trace line for the day just simulated
pub fn summarize_day(colony: &Colony) -> DaySummary {
    DaySummary {
        day: colony.day,
        workers: colony.live_workers() as u32,
        soldiers: colony.live_soldiers() as u32,
        larvae: colony.larvae.len() as u32,
        pupae: colony.pupae.len() as u32,
        food: colony.food_storage,
        deaths: colony.death_stats.deaths_on(colony.day).count() as u32,
        attacked: colony.events_log.events_for_day(colony.day).next().is_some(),
    }
}

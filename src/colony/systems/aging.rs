//! Aging of the queen and adults

use rand_chacha::ChaCha8Rng;

use crate::ant::Ant;
use crate::colony::nest::Colony;
use crate::colony::systems::remove_dead;
use crate::core::config::SimulationConfig;
use crate::core::types::Day;

/// Age the queen, every worker and every soldier by one day
///
/// Ants that die here are recorded and removed.
pub fn age_colony(colony: &mut Colony) {
    let day = colony.day;

    let queen_was_alive = colony.queen.is_alive();
    colony.queen.age_one_step(day, &colony.config, &mut colony.rng);
    if queen_was_alive {
        if let Some(death) = colony.queen.death {
            tracing::warn!(
                "The queen of '{}' died of {} on day {}",
                colony.name,
                death.cause,
                day
            );
            colony.death_stats.record_death(&colony.queen, death.cause, day);
        }
    }

    let dead_workers = age_all(&mut colony.workers, day, &colony.config, &mut colony.rng);
    let dead_soldiers = age_all(&mut colony.soldiers, day, &colony.config, &mut colony.rng);

    if !dead_workers.is_empty() || !dead_soldiers.is_empty() {
        tracing::debug!(
            "Day {}: {} workers and {} soldiers died",
            day,
            dead_workers.len(),
            dead_soldiers.len()
        );
    }
    colony.record_deaths(dead_workers.iter().chain(&dead_soldiers));
}

fn age_all(ants: &mut Vec<Ant>, day: Day, config: &SimulationConfig, rng: &mut ChaCha8Rng) -> Vec<Ant> {
    for ant in ants.iter_mut() {
        ant.age_one_step(day, config, rng);
    }
    remove_dead(ants)
}

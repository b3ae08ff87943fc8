//! Foraging

use crate::ant::WorkOutcome;
use crate::colony::events::TickEvent;
use crate::colony::nest::Colony;
use crate::colony::systems::remove_dead;

/// Drop dead workers, then send every living worker out; returns food gathered
pub fn collect_food(colony: &mut Colony, events: &mut Vec<TickEvent>) -> u32 {
    let day = colony.day;

    let dead = remove_dead(&mut colony.workers);
    for worker in &dead {
        events.push(TickEvent::WorkerRemoved {
            cause: worker.death.map(|d| d.cause),
        });
    }
    colony.record_deaths(&dead);

    let mut gathered = 0;
    for worker in colony.workers.iter_mut() {
        if let WorkOutcome::Foraged(amount) = worker.work(day, &colony.config, &mut colony.rng) {
            gathered += amount;
        }
    }

    colony.food_storage = colony.food_storage.saturating_add(gathered);
    tracing::debug!(
        "{} workers gathered {} food ({} stored)",
        colony.workers.len(),
        gathered,
        colony.food_storage
    );
    events.push(TickEvent::FoodCollected {
        amount: gathered,
        stored: colony.food_storage,
    });

    gathered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::DeathCause;
    use crate::core::config::SimulationConfig;

    #[test]
    fn test_gathering_within_bounds() {
        let config = SimulationConfig {
            initial_workers: 5,
            initial_food: 0,
            ..Default::default()
        };
        let mut colony = Colony::new("Foragers", config, 11).unwrap();
        let mut events = Vec::new();

        let gathered = collect_food(&mut colony, &mut events);

        assert!((5..=15).contains(&gathered));
        assert_eq!(colony.food_storage, gathered);
        assert_eq!(
            events,
            vec![TickEvent::FoodCollected {
                amount: gathered,
                stored: gathered
            }]
        );
    }

    #[test]
    fn test_dead_workers_removed_before_foraging() {
        let config = SimulationConfig {
            initial_workers: 3,
            initial_food: 0,
            ..Default::default()
        };
        let mut colony = Colony::new("Foragers", config, 11).unwrap();
        colony.day = 2;
        let dead_id = colony.workers[1].id;
        colony.workers[1].die(DeathCause::Disease, 1);
        let mut events = Vec::new();

        let gathered = collect_food(&mut colony, &mut events);

        assert_eq!(colony.workers.len(), 2);
        assert!((2..=6).contains(&gathered));
        assert!(colony.death_stats.is_recorded(dead_id));
        assert_eq!(
            events[0],
            TickEvent::WorkerRemoved {
                cause: Some(DeathCause::Disease)
            }
        );
    }
}

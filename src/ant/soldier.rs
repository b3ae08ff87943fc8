//! Soldier - defends the colony during raids

use rand::Rng;

use crate::ant::{Ant, DeathCause, WorkOutcome};
use crate::core::config::SimulationConfig;
use crate::core::types::Day;

impl Ant {
    /// Combat wear: a single injury roll. A soldier worn to zero health dies of injury.
    pub(crate) fn patrol(&mut self, day: Day, config: &SimulationConfig, rng: &mut impl Rng) -> WorkOutcome {
        let injured = self.try_injury(config, rng);
        if injured && self.health == 0 {
            self.die(DeathCause::Injury, day);
        }
        WorkOutcome::Patrolled { injured }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AntId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_patrol_with_certain_injury() {
        let config = SimulationConfig {
            injury_chance: 1.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut soldier = Ant::soldier(AntId(1), &config);

        let outcome = soldier.work(1, &config, &mut rng);

        assert_eq!(outcome, WorkOutcome::Patrolled { injured: true });
        assert!(soldier.injured);
        assert_eq!(soldier.health, 85);
        assert!(!soldier.diseased);
        assert!(soldier.is_alive());
    }

    #[test]
    fn test_patrol_without_injury_changes_nothing() {
        let config = SimulationConfig {
            injury_chance: 0.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut soldier = Ant::soldier(AntId(1), &config);

        let outcome = soldier.work(1, &config, &mut rng);

        assert_eq!(outcome, WorkOutcome::Patrolled { injured: false });
        assert_eq!(soldier.health, 100);
    }

    #[test]
    fn test_worn_out_soldier_dies_of_injury() {
        let config = SimulationConfig {
            injury_chance: 1.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut soldier = Ant::soldier(AntId(1), &config);
        soldier.health = 15;

        soldier.work(7, &config, &mut rng);

        assert_eq!(soldier.health, 0);
        assert!(soldier.is_dead());
        let death = soldier.death.unwrap();
        assert_eq!(death.cause, DeathCause::Injury);
        assert_eq!(death.day, 7);

        // The dead take no more meals
        soldier.feed(10, &config);
        assert_eq!(soldier.health, 0);
    }
}

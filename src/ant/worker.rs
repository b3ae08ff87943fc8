//! Worker - forages food for the colony

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_FORAGE: u32 = 1;
pub const MAX_FORAGE: u32 = 3;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkerState {
    /// Food brought back on the most recent trip
    pub last_foraged: u32,
}

impl WorkerState {
    pub(crate) fn forage(&mut self, rng: &mut impl Rng) -> u32 {
        self.last_foraged = rng.gen_range(MIN_FORAGE..=MAX_FORAGE);
        self.last_foraged
    }
}

#[cfg(test)]
mod tests {
    use crate::ant::{Ant, WorkOutcome};
    use crate::core::config::SimulationConfig;
    use crate::core::types::AntId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_forage_yield_in_range() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut worker = Ant::worker(AntId(1), &config);

        for day in 1..=50 {
            let WorkOutcome::Foraged(food) = worker.work(day, &config, &mut rng) else {
                panic!("worker should forage");
            };
            assert!((1..=3).contains(&food));
            assert_eq!(worker.worker_state().unwrap().last_foraged, food);
        }
    }

    #[test]
    fn test_forage_does_not_touch_vitals() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut worker = Ant::worker(AntId(1), &config);
        worker.work(1, &config, &mut rng);
        assert_eq!(worker.health, 100);
        assert_eq!(worker.age, 0);
        assert!(!worker.injured);
    }
}

//! Brood - larvae and pupae on their way to adulthood
//!
//! The future role is drawn once when the larva is created and travels with
//! it through pupation. Only worker and soldier futures ever hatch; drone
//! brood finish growing and simply leave the colony.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ant::{Ant, Caste, DeathCause, LifeState, WorkOutcome};
use crate::core::config::SimulationConfig;
use crate::core::types::Day;

/// Brood never reach old age; the growth durations end the stage long before
pub const BROOD_MAX_AGE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FutureRole {
    Worker,
    Soldier,
    Drone,
}

impl FutureRole {
    /// Weighted draw: workers, then soldiers, the remainder drones
    pub fn draw(config: &SimulationConfig, rng: &mut impl Rng) -> Self {
        let roll: f64 = rng.gen();
        if roll < config.worker_chance {
            FutureRole::Worker
        } else if roll < config.worker_chance + config.soldier_chance {
            FutureRole::Soldier
        } else {
            FutureRole::Drone
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FutureRole::Worker => "worker",
            FutureRole::Soldier => "soldier",
            FutureRole::Drone => "drone",
        }
    }

    pub fn hatches(&self) -> bool {
        !matches!(self, FutureRole::Drone)
    }
}

impl std::fmt::Display for FutureRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Attributes the brood will have as an adult, fixed at creation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FutureTraits {
    pub max_age: u32,
    pub strength: u32,
    pub speed: f32,
    pub description: String,
}

impl FutureTraits {
    pub fn for_role(future: FutureRole, config: &SimulationConfig) -> Self {
        let (max_age, strength, speed, description) = match future {
            FutureRole::Worker => (config.worker_max_age, 5, 2.0, "Worker ant"),
            FutureRole::Soldier => (config.soldier_max_age, 15, 1.5, "Soldier"),
            FutureRole::Drone => (config.drone_max_age, 3, 3.0, "Drone"),
        };
        Self {
            max_age,
            strength,
            speed,
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroodStage {
    Larva,
    Pupa,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BroodState {
    pub future: FutureRole,
    pub traits: FutureTraits,
    pub stage: BroodStage,
    /// Days grown in the current stage
    pub growth_progress: u32,
}

impl BroodState {
    pub fn new(future: FutureRole, config: &SimulationConfig) -> Self {
        Self {
            future,
            traits: FutureTraits::for_role(future, config),
            stage: BroodStage::Larva,
            growth_progress: 0,
        }
    }
}

impl Ant {
    /// One day of brood development
    ///
    /// A starving larva may die before it grows further; a larva that
    /// reaches its growth duration pupates and starts counting again.
    pub(crate) fn grow(&mut self, day: Day, config: &SimulationConfig, rng: &mut impl Rng) -> WorkOutcome {
        let starving = self.hunger >= config.hunger_threshold;
        let Caste::Brood(ref mut brood) = self.caste else {
            return WorkOutcome::Idle;
        };

        brood.growth_progress += 1;
        let stage = brood.stage;

        match stage {
            BroodStage::Larva => {
                if starving && rng.gen_bool(config.larva_starvation_chance) {
                    tracing::debug!("Larva (future {}) starved", brood.future);
                    self.die(DeathCause::LarvalStarvation, day);
                    return WorkOutcome::Starved;
                }

                if brood.growth_progress >= config.larva_growth_duration {
                    brood.stage = BroodStage::Pupa;
                    brood.growth_progress = 0;
                    self.state = LifeState::Pupa;
                    return WorkOutcome::Pupated;
                }

                WorkOutcome::Grew {
                    progress: brood.growth_progress,
                }
            }
            BroodStage::Pupa => {
                if brood.growth_progress >= config.pupa_growth_duration {
                    WorkOutcome::ReadyToHatch(brood.future)
                } else {
                    WorkOutcome::Grew {
                        progress: brood.growth_progress,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::Role;
    use crate::core::types::AntId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_future_role_draw_respects_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let all_workers = SimulationConfig {
            worker_chance: 1.0,
            soldier_chance: 0.0,
            ..Default::default()
        };
        let all_drones = SimulationConfig {
            worker_chance: 0.0,
            soldier_chance: 0.0,
            ..Default::default()
        };

        for _ in 0..100 {
            assert_eq!(FutureRole::draw(&all_workers, &mut rng), FutureRole::Worker);
            assert_eq!(FutureRole::draw(&all_drones, &mut rng), FutureRole::Drone);
        }
    }

    #[test]
    fn test_future_role_draw_mixes_roles() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let config = SimulationConfig {
            worker_chance: 0.4,
            soldier_chance: 0.3,
            ..Default::default()
        };
        let draws: Vec<FutureRole> = (0..500).map(|_| FutureRole::draw(&config, &mut rng)).collect();
        for role in [FutureRole::Worker, FutureRole::Soldier, FutureRole::Drone] {
            assert!(draws.contains(&role), "expected at least one {}", role);
        }
    }

    #[test]
    fn test_future_traits_snapshot() {
        let config = SimulationConfig::default();
        let soldier = FutureTraits::for_role(FutureRole::Soldier, &config);
        assert_eq!(soldier.max_age, 25);
        assert_eq!(soldier.strength, 15);
        let drone = FutureTraits::for_role(FutureRole::Drone, &config);
        assert_eq!(drone.max_age, config.drone_max_age);
        assert!(!FutureRole::Drone.hatches());
    }

    #[test]
    fn test_larva_pupates_after_growth_duration() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut larva = Ant::larva_with_future(AntId(1), &config, FutureRole::Worker);

        assert_eq!(larva.work(1, &config, &mut rng), WorkOutcome::Grew { progress: 1 });
        assert_eq!(larva.work(2, &config, &mut rng), WorkOutcome::Grew { progress: 2 });
        assert_eq!(larva.work(3, &config, &mut rng), WorkOutcome::Pupated);

        assert_eq!(larva.role(), Role::Pupa);
        assert_eq!(larva.state, LifeState::Pupa);
        assert_eq!(larva.brood().unwrap().growth_progress, 0);
        assert_eq!(larva.future_role(), Some(FutureRole::Worker));
    }

    #[test]
    fn test_pupa_reports_ready_to_hatch() {
        let config = SimulationConfig {
            larva_growth_duration: 1,
            pupa_growth_duration: 2,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut brood = Ant::larva_with_future(AntId(1), &config, FutureRole::Soldier);

        assert_eq!(brood.work(1, &config, &mut rng), WorkOutcome::Pupated);
        assert_eq!(brood.work(2, &config, &mut rng), WorkOutcome::Grew { progress: 1 });
        assert_eq!(
            brood.work(3, &config, &mut rng),
            WorkOutcome::ReadyToHatch(FutureRole::Soldier)
        );
    }

    #[test]
    fn test_starving_larva_dies_when_roll_succeeds() {
        let config = SimulationConfig {
            larva_starvation_chance: 1.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut larva = Ant::larva_with_future(AntId(1), &config, FutureRole::Worker);
        larva.hunger = config.hunger_threshold;

        assert_eq!(larva.work(6, &config, &mut rng), WorkOutcome::Starved);
        assert_eq!(larva.death.map(|d| d.cause), Some(DeathCause::LarvalStarvation));
        assert_eq!(larva.death.map(|d| d.day), Some(6));
    }

    #[test]
    fn test_fed_larva_never_rolls_starvation() {
        let config = SimulationConfig {
            larva_starvation_chance: 1.0,
            larva_growth_duration: 10,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut larva = Ant::larva_with_future(AntId(1), &config, FutureRole::Worker);
        larva.hunger = config.hunger_threshold - 1;

        assert_eq!(larva.work(1, &config, &mut rng), WorkOutcome::Grew { progress: 1 });
        assert!(larva.is_alive());
    }

    #[test]
    fn test_pupa_does_not_starve() {
        let config = SimulationConfig {
            larva_starvation_chance: 1.0,
            larva_growth_duration: 1,
            pupa_growth_duration: 5,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut brood = Ant::larva_with_future(AntId(1), &config, FutureRole::Worker);
        brood.work(1, &config, &mut rng);
        brood.hunger = 500;

        assert_eq!(brood.work(2, &config, &mut rng), WorkOutcome::Grew { progress: 1 });
        assert!(brood.is_alive());
    }
}

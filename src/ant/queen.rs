//! Queen - the colony's only source of eggs

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ant::{Ant, Caste};
use crate::core::config::SimulationConfig;

/// Food credit the queen must hold before she can lay
pub const LAYING_FOOD_CREDIT: u32 = 3;

/// Each unit of food handed to the queen relieves this much hunger
pub const QUEEN_FEED_MULTIPLIER: u32 = 10;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueenState {
    pub eggs_laid: u32,
    pub days_since_last_laying: u32,
    /// Food delivered by workers since the last clutch
    pub food_credit: u32,
}

impl QueenState {
    /// Whether the queen may roll to lay today
    pub fn ready_to_lay(&self, config: &SimulationConfig) -> bool {
        self.food_credit >= LAYING_FOOD_CREDIT
            && self.days_since_last_laying >= config.queen_egg_laying_interval
    }

    /// Count another day and maybe lay a clutch; returns the clutch size
    pub(crate) fn work(&mut self, config: &SimulationConfig, rng: &mut impl Rng) -> u32 {
        self.days_since_last_laying += 1;

        if !self.ready_to_lay(config) || !rng.gen_bool(config.queen_egg_laying_chance) {
            return 0;
        }

        let eggs = rng.gen_range(config.queen_egg_min_count..=config.queen_egg_max_count);
        self.eggs_laid += eggs;
        self.days_since_last_laying = 0;
        self.food_credit = 0;
        tracing::debug!("Queen laid {} eggs ({} total)", eggs, self.eggs_laid);
        eggs
    }
}

impl Ant {
    /// Hand food to the queen: it counts toward laying and feeds her tenfold
    ///
    /// No effect on other castes or on a dead queen.
    pub fn receive_food(&mut self, amount: u32, config: &SimulationConfig) {
        if !self.is_alive() {
            return;
        }
        if let Caste::Queen(ref mut queen) = self.caste {
            queen.food_credit += amount;
            self.feed(amount * QUEEN_FEED_MULTIPLIER, config);
        }
    }
}

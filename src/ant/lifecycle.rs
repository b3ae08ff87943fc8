//! Per-tick lifecycle state machine shared by every caste
//!
//! Adults (queen, workers, soldiers) run the full sequence: hunger, disease,
//! injury, old age. Brood run a reduced one with heavier hunger and no
//! disease or injury rolls. Both stop mutating the moment the ant dies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ant::{Ant, Caste};
use crate::core::config::SimulationConfig;
use crate::core::types::Day;

pub const MAX_HEALTH: u32 = 100;

/// Hunger gained per day by adults
pub const ADULT_HUNGER_RATE: u32 = 10;

/// Hunger gained per day by brood (1.5x adults)
pub const BROOD_HUNGER_RATE: u32 = 15;

/// Brood take this multiple of `hunger_damage`
pub const BROOD_HUNGER_DAMAGE_FACTOR: u32 = 2;

pub const DISEASE_PENALTY: u32 = 10;
pub const INJURY_PENALTY: u32 = 15;

/// Health restored by a meal that leaves the ant below the hunger threshold
pub const FEED_HEAL: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Old,
    Dead,
    Larva,
    Pupa,
}

impl std::fmt::Display for LifeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifeState::Alive => "alive",
            LifeState::Old => "old",
            LifeState::Dead => "dead",
            LifeState::Larva => "larva",
            LifeState::Pupa => "pupa",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeathCause {
    Hunger,
    Disease,
    Injury,
    OldAge,
    LowHealth,
    LarvalStarvation,
    LarvalLowHealth,
    /// Soldier killed defending the colony
    KilledInBattle,
    /// Worker killed when raiders broke in
    KilledInRaid,
}

impl DeathCause {
    pub fn label(&self) -> &'static str {
        match self {
            DeathCause::Hunger => "hunger",
            DeathCause::Disease => "disease",
            DeathCause::Injury => "injury",
            DeathCause::OldAge => "old age",
            DeathCause::LowHealth => "low health",
            DeathCause::LarvalStarvation => "larval starvation",
            DeathCause::LarvalLowHealth => "low health (larva)",
            DeathCause::KilledInBattle => "killed in battle",
            DeathCause::KilledInRaid => "killed in raid",
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, DeathCause::KilledInBattle | DeathCause::KilledInRaid)
    }
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Death {
    pub cause: DeathCause,
    pub day: Day,
}

impl Ant {
    /// Transition into `Dead`. A second call keeps the first cause.
    pub fn die(&mut self, cause: DeathCause, day: Day) {
        if !self.is_alive() {
            return;
        }
        self.state = LifeState::Dead;
        self.death = Some(Death { cause, day });
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Reduce hunger by `amount`; heal a little if that ends the starvation
    pub fn feed(&mut self, amount: u32, config: &SimulationConfig) {
        if !self.is_alive() {
            return;
        }
        self.hunger = self.hunger.saturating_sub(amount);
        if self.hunger < config.hunger_threshold {
            self.heal(FEED_HEAL);
        }
    }

    /// Roll for disease; returns whether the ant fell ill
    pub fn try_disease(&mut self, config: &SimulationConfig, rng: &mut impl Rng) -> bool {
        if !self.is_alive() || !rng.gen_bool(config.disease_chance) {
            return false;
        }
        self.diseased = true;
        self.take_damage(DISEASE_PENALTY);
        true
    }

    /// Roll for injury; returns whether the ant got hurt
    pub fn try_injury(&mut self, config: &SimulationConfig, rng: &mut impl Rng) -> bool {
        if !self.is_alive() || !rng.gen_bool(config.injury_chance) {
            return false;
        }
        self.injured = true;
        self.take_damage(INJURY_PENALTY);
        true
    }

    /// Advance one day of life
    pub fn age_one_step(&mut self, day: Day, config: &SimulationConfig, rng: &mut impl Rng) {
        if !self.is_alive() {
            return;
        }
        match self.caste {
            Caste::Brood(_) => self.age_brood(day, config),
            _ => self.age_adult(day, config, rng),
        }
    }

    fn age_adult(&mut self, day: Day, config: &SimulationConfig, rng: &mut impl Rng) {
        self.age += 1;
        self.hunger = self.hunger.saturating_add(ADULT_HUNGER_RATE);

        if self.hunger >= config.hunger_threshold {
            self.take_damage(config.hunger_damage);
            if self.health == 0 {
                self.die(DeathCause::Hunger, day);
                return;
            }
        }

        if self.try_disease(config, rng) && self.health == 0 {
            self.die(DeathCause::Disease, day);
            return;
        }

        if self.try_injury(config, rng) && self.health == 0 {
            self.die(DeathCause::Injury, day);
            return;
        }

        if self.age >= self.max_age && self.state == LifeState::Alive {
            self.state = LifeState::Old;
        }

        if self.state == LifeState::Old && rng.gen_bool(config.old_age_death_chance) {
            self.die(DeathCause::OldAge, day);
            return;
        }

        if self.health == 0 {
            self.die(DeathCause::LowHealth, day);
        }
    }

    fn age_brood(&mut self, day: Day, config: &SimulationConfig) {
        self.age += 1;
        self.hunger = self.hunger.saturating_add(BROOD_HUNGER_RATE);

        if self.hunger >= config.hunger_threshold {
            self.take_damage(config.hunger_damage.saturating_mul(BROOD_HUNGER_DAMAGE_FACTOR));
        }

        if self.health == 0 {
            self.die(DeathCause::LarvalLowHealth, day);
        }
    }
}

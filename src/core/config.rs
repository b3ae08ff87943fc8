//! Simulation configuration with documented constants
//!
//! Every probability, duration and threshold the colony consults lives here.
//! The colony reads a validated copy and never mutates it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ColonyError, Result};

/// Configuration for a colony run
///
/// Defaults produce a colony that usually survives a month while still
/// losing ants to disease, old age and the occasional raid. Any field
/// missing from a TOML file falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === HEALTH ===
    /// Daily chance for an adult to fall ill (costs 10 health)
    pub disease_chance: f64,

    /// Daily chance for an adult to get hurt (costs 15 health)
    ///
    /// Soldiers roll this once more after every raid they survive.
    pub injury_chance: f64,

    /// Daily chance that an ant past its max age dies of old age
    pub old_age_death_chance: f64,

    /// Health lost per day while hunger is at or above `hunger_threshold`
    ///
    /// Brood take double this amount.
    pub hunger_damage: u32,

    /// Hunger level at which an ant starts starving
    ///
    /// Adults gain 10 hunger per day and brood 15, so an unfed adult
    /// starts taking damage on day 10 and an unfed larva on day 7.
    pub hunger_threshold: u32,

    // === QUEEN ===
    /// Chance to lay once the queen is fed and the interval has passed
    pub queen_egg_laying_chance: f64,

    /// Minimum days between two clutches
    pub queen_egg_laying_interval: u32,

    /// Smallest clutch size (inclusive)
    pub queen_egg_min_count: u32,

    /// Largest clutch size (inclusive)
    pub queen_egg_max_count: u32,

    // === BROOD ===
    /// Days a larva needs before pupating
    pub larva_growth_duration: u32,

    /// Days a pupa needs before hatching
    pub pupa_growth_duration: u32,

    /// Daily chance that a starving larva dies outright
    pub larva_starvation_chance: f64,

    /// Share of new larvae destined to become workers
    pub worker_chance: f64,

    /// Share of new larvae destined to become soldiers
    ///
    /// Whatever is left after workers and soldiers becomes drones.
    /// Drone brood are raised but never join the colony.
    pub soldier_chance: f64,

    // === COLONY ===
    /// Workers present on day zero
    pub initial_workers: u32,

    /// Food units in storage on day zero
    pub initial_food: u32,

    pub queen_max_age: u32,
    pub worker_max_age: u32,
    pub soldier_max_age: u32,
    pub drone_max_age: u32,

    /// Whether reports list each day's deaths individually
    pub show_detailed_stats: bool,

    // === RAIDS ===
    /// Daily chance of an attack once raids are possible
    pub attack_chance: f64,

    /// First day on which an attack can happen
    pub min_days_for_attack: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // Health
            disease_chance: 0.3,
            injury_chance: 0.3,
            old_age_death_chance: 0.7,
            hunger_damage: 20,
            hunger_threshold: 100,

            // Queen
            queen_egg_laying_chance: 0.8,
            queen_egg_laying_interval: 3,
            queen_egg_min_count: 1,
            queen_egg_max_count: 5,

            // Brood (worker + soldier = 1.0 so no drones by default)
            larva_growth_duration: 3,
            pupa_growth_duration: 2,
            larva_starvation_chance: 0.3,
            worker_chance: 0.6,
            soldier_chance: 0.4,

            // Colony
            initial_workers: 20,
            initial_food: 100,
            queen_max_age: 50,
            worker_max_age: 30,
            soldier_max_age: 25,
            drone_max_age: 20,
            show_detailed_stats: true,

            // Raids
            attack_chance: 0.15,
            min_days_for_attack: 5,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text, filling gaps with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    ///
    /// Must pass before a colony is built; the simulation relies on every
    /// probability being a valid Bernoulli parameter.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            (self.disease_chance, "disease_chance"),
            (self.injury_chance, "injury_chance"),
            (self.old_age_death_chance, "old_age_death_chance"),
            (self.queen_egg_laying_chance, "queen_egg_laying_chance"),
            (self.larva_starvation_chance, "larva_starvation_chance"),
            (self.worker_chance, "worker_chance"),
            (self.soldier_chance, "soldier_chance"),
            (
                self.worker_chance + self.soldier_chance,
                "sum of development chances",
            ),
            (self.attack_chance, "attack_chance"),
        ];

        for (value, name) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColonyError::InvalidConfig(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.queen_egg_min_count > self.queen_egg_max_count {
            return Err(ColonyError::InvalidConfig(format!(
                "queen_egg_min_count ({}) cannot be greater than queen_egg_max_count ({})",
                self.queen_egg_min_count, self.queen_egg_max_count
            )));
        }

        Ok(())
    }

    /// Share of larvae that become drones
    pub fn drone_chance(&self) -> f64 {
        (1.0 - self.worker_chance - self.soldier_chance).max(0.0)
    }
}

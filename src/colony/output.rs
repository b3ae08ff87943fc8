//! Statistics snapshots and simulation output

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::colony::events::ColonyEvent;
use crate::colony::mortality::{DeathRecord, DeathSummary};
use crate::core::types::Day;

/// Point-in-time view of a colony for reports
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColonyStatistics {
    pub name: String,
    pub day: Day,
    pub queen: QueenStatus,
    pub population: PopulationStats,
    pub larva_types: LarvaTypeCounts,
    pub death_statistics: DeathSummary,
    pub food: u32,
    pub events: EventStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueenStatus {
    pub health: u32,
    pub age: u32,
    pub eggs_laid: u32,
    pub is_alive: bool,
    pub death_info: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PopulationStats {
    pub workers: u32,
    pub soldiers: u32,
    pub larvae: u32,
    pub pupae: u32,
    /// Living queen, workers and soldiers
    pub total_live: u32,
    /// Living adults plus every recorded death
    pub total_ever_created: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LarvaTypeCounts {
    pub worker: u32,
    pub soldier: u32,
    pub drone: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventStats {
    pub total_events: u32,
    pub attack_events: u32,
    pub successful_defenses: u32,
    pub ants_lost_in_attacks: u32,
    pub food_lost_in_attacks: u32,
    pub recent_events: Vec<ColonyEvent>,
}

/// One line of the day-by-day trace
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: Day,
    pub workers: u32,
    pub soldiers: u32,
    pub larvae: u32,
    pub pupae: u32,
    pub food: u32,
    pub deaths: u32,
    pub attacked: bool,
}

/// Complete output of a colony run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub seed: u64,
    pub days_requested: u32,
    pub survived: bool,
    pub simulation_time_ms: u64,
    pub statistics: ColonyStatistics,
    pub days: Vec<DaySummary>,
    pub deaths: Vec<DeathRecord>,
}

impl SimulationOutput {
    pub fn new(
        seed: u64,
        days_requested: u32,
        survived: bool,
        elapsed: Duration,
        statistics: ColonyStatistics,
        days: Vec<DaySummary>,
        deaths: Vec<DeathRecord>,
    ) -> Self {
        Self {
            seed,
            days_requested,
            survived,
            simulation_time_ms: elapsed.as_millis() as u64,
            statistics,
            days,
            deaths,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let stats = &self.statistics;
        format!(
            "Colony '{}' {} after {} of {} days ({}ms)\n{} ants alive, {} deaths, {} food, {} attacks ({} repelled)",
            stats.name,
            if self.survived { "survived" } else { "perished" },
            stats.day,
            self.days_requested,
            self.simulation_time_ms,
            stats.population.total_live,
            stats.death_statistics.total_deaths,
            stats.food,
            stats.events.attack_events,
            stats.events.successful_defenses,
        )
    }
}

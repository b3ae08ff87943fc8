//! Death statistics - an append-only ledger with running breakdowns

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ant::{Ant, DeathCause, FutureRole};
use crate::core::types::{AntId, Day};

/// Age bracket used in mortality breakdowns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    Young,
    Adult,
    Elderly,
}

impl AgeBand {
    pub fn of(age: u32) -> Self {
        if age < 5 {
            AgeBand::Young
        } else if age < 20 {
            AgeBand::Adult
        } else {
            AgeBand::Elderly
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Young => "young (<5 days)",
            AgeBand::Adult => "adult (5-20 days)",
            AgeBand::Elderly => "elderly (>20 days)",
        }
    }
}

/// One entry in the ledger
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub ant_id: AntId,
    pub day: Day,
    pub ant_type: String,
    pub age: u32,
    pub cause: DeathCause,
    /// Set for brood only
    pub future_role: Option<FutureRole>,
}

/// Aggregated view of the ledger
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathSummary {
    pub total_deaths: u32,
    pub by_cause: BTreeMap<String, u32>,
    pub by_type: BTreeMap<String, u32>,
    pub by_age: BTreeMap<String, u32>,
}

impl DeathSummary {
    /// Entries sorted by count, largest first (ties by name)
    pub fn ranked(map: &BTreeMap<String, u32>) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[derive(Clone, Debug, Default)]
pub struct DeathStatistics {
    records: Vec<DeathRecord>,
    by_cause: AHashMap<DeathCause, u32>,
    by_type: AHashMap<String, u32>,
    by_age: AHashMap<AgeBand, u32>,
    recorded: AHashSet<AntId>,
}

impl DeathStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a death to the ledger; returns false if this ant was already recorded
    pub fn record_death(&mut self, ant: &Ant, cause: DeathCause, day: Day) -> bool {
        if !self.recorded.insert(ant.id) {
            tracing::warn!("Ignoring second death record for ant {}", ant.id);
            return false;
        }

        let ant_type = ant.type_label();
        *self.by_cause.entry(cause).or_insert(0) += 1;
        *self.by_type.entry(ant_type.clone()).or_insert(0) += 1;
        *self.by_age.entry(AgeBand::of(ant.age)).or_insert(0) += 1;

        self.records.push(DeathRecord {
            ant_id: ant.id,
            day,
            ant_type,
            age: ant.age,
            cause,
            future_role: ant.future_role(),
        });
        true
    }

    pub fn total_deaths(&self) -> u32 {
        self.records.len() as u32
    }

    pub fn records(&self) -> &[DeathRecord] {
        &self.records
    }

    pub fn deaths_on(&self, day: Day) -> impl Iterator<Item = &DeathRecord> {
        self.records.iter().filter(move |r| r.day == day)
    }

    pub fn is_recorded(&self, id: AntId) -> bool {
        self.recorded.contains(&id)
    }

    pub fn count_for_cause(&self, cause: DeathCause) -> u32 {
        self.by_cause.get(&cause).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> DeathSummary {
        DeathSummary {
            total_deaths: self.total_deaths(),
            by_cause: self
                .by_cause
                .iter()
                .map(|(cause, count)| (cause.label().to_string(), *count))
                .collect(),
            by_type: self.by_type.iter().map(|(t, count)| (t.clone(), *count)).collect(),
            by_age: self
                .by_age
                .iter()
                .map(|(band, count)| (band.label().to_string(), *count))
                .collect(),
        }
    }
}

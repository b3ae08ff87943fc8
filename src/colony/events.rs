//! Colony events and the per-day narrative
//!
//! [`EventLog`] is the permanent record of notable events (attacks).
//! [`TickEvent`] is the narrative of a single day, returned by
//! `Colony::simulate_day` for a presentation layer to render.

use serde::{Deserialize, Serialize};

use crate::ant::{DeathCause, FutureRole};
use crate::colony::attack::{Attacker, ThreatLevel};
use crate::core::types::Day;

/// A logged colony event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColonyEvent {
    pub id: u32,
    pub day: Day,
    pub kind: ColonyEventKind,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColonyEventKind {
    Attack {
        attacker: Attacker,
        success: bool,
        food_lost: u32,
        ants_lost: u32,
    },
}

impl ColonyEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            ColonyEventKind::Attack { .. } => "attack",
        }
    }
}

/// Append-only log of colony events
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<ColonyEvent>,
    next_event_id: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, kind: ColonyEventKind, day: Day, description: String) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(ColonyEvent {
            id,
            day,
            kind,
            description,
        });

        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_for_day(&self, day: Day) -> impl Iterator<Item = &ColonyEvent> {
        self.events.iter().filter(move |e| e.day == day)
    }

    pub fn attacks(&self) -> impl Iterator<Item = &ColonyEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, ColonyEventKind::Attack { .. }))
    }

    pub fn successful_defenses(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, ColonyEventKind::Attack { success: true, .. }))
            .count()
    }

    /// Total (ants lost, food lost) across all attacks
    pub fn attack_losses(&self) -> (u32, u32) {
        self.events.iter().fold((0, 0), |(ants, food), e| match e.kind {
            ColonyEventKind::Attack {
                ants_lost,
                food_lost,
                ..
            } => (ants + ants_lost, food + food_lost),
        })
    }

    /// The last `count` events, oldest first
    pub fn recent(&self, count: usize) -> &[ColonyEvent] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }
}

/// Something that happened during one simulated day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    AttackAnnounced {
        attacker: Attacker,
        threat: ThreatLevel,
    },
    AttackResolved {
        success: bool,
        message: String,
        food_lost: u32,
        food_remaining: u32,
        /// (type label, count) in order of first loss
        losses: Vec<(String, u32)>,
        soldiers_left: u32,
    },
    NoDefendersLeft,
    WorkerRemoved {
        cause: Option<DeathCause>,
    },
    FoodCollected {
        amount: u32,
        stored: u32,
    },
    QueenFed {
        amount: u32,
    },
    EggsLaid {
        count: u32,
        total: u32,
    },
    LarvaGrew {
        future: FutureRole,
        progress: u32,
        duration: u32,
    },
    LarvaPupated {
        future: FutureRole,
    },
    LarvaStarved {
        future: FutureRole,
    },
    Hatched {
        role: FutureRole,
    },
    DroneLeft,
    HatchSummary {
        workers: u32,
        soldiers: u32,
    },
}

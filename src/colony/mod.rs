//! Colony Simulation
//!
//! The colony owns every ant and advances one day at a time through a fixed
//! pipeline of phases (see [`systems`]). Raids, the death ledger and the
//! event log live alongside it.

pub mod attack;
pub mod events;
pub mod mortality;
pub mod nest;
pub mod output;
pub mod simulation;
pub mod systems;

pub use attack::{AttackEvent, AttackOutcome, Attacker, ThreatLevel};
pub use events::{ColonyEvent, ColonyEventKind, EventLog, TickEvent};
pub use mortality::{AgeBand, DeathRecord, DeathStatistics, DeathSummary};
pub use nest::Colony;
pub use output::{ColonyStatistics, DaySummary, SimulationOutput};
pub use simulation::{simulate, RunOptions};

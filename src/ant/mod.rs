//! Ants - the organisms of the colony
//!
//! Every queen, worker, soldier, larva and pupa is an [`Ant`]: shared vitals
//! (health, hunger, age, life state) plus a closed [`Caste`] carrying the
//! role-specific state. Behavior dispatches on the caste with exhaustive
//! matches, so adding a role forces every phase to handle it.

pub mod brood;
pub mod lifecycle;
pub mod queen;
pub mod soldier;
pub mod worker;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{AntId, Day};

pub use brood::{BroodStage, BroodState, FutureRole, FutureTraits};
pub use lifecycle::{Death, DeathCause, LifeState, MAX_HEALTH};
pub use queen::QueenState;
pub use worker::WorkerState;

/// Role-specific state - enum variants for static dispatch
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Caste {
    Queen(QueenState),
    Worker(WorkerState),
    Soldier,
    Brood(BroodState),
}

/// Functional category of an ant, brood split by stage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Queen,
    Worker,
    Soldier,
    Larva,
    Pupa,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Queen => "Queen",
            Role::Worker => "Worker",
            Role::Soldier => "Soldier",
            Role::Larva => "Larva",
            Role::Pupa => "Pupa",
        }
    }
}

/// What a single call to [`Ant::work`] produced
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorkOutcome {
    /// Dead ants do nothing
    Idle,
    /// Queen clutch size (0 when she did not lay)
    EggsLaid(u32),
    /// Food units a worker brought back
    Foraged(u32),
    /// Soldier rounds; `injured` when the wear roll hit
    Patrolled { injured: bool },
    /// Brood grew one step without changing stage
    Grew { progress: u32 },
    /// Larva became a pupa
    Pupated,
    /// Larva died of starvation
    Starved,
    /// Pupa finished growing and can hatch
    ReadyToHatch(FutureRole),
}

/// A single organism
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ant {
    pub id: AntId,
    pub max_age: u32,
    /// 0..=100, clamped on every change
    pub health: u32,
    pub hunger: u32,
    pub age: u32,
    pub state: LifeState,
    pub diseased: bool,
    pub injured: bool,
    /// Set once, on the transition into `Dead`
    pub death: Option<Death>,
    pub caste: Caste,
}

impl Ant {
    fn with_caste(id: AntId, max_age: u32, state: LifeState, caste: Caste) -> Self {
        Self {
            id,
            max_age,
            health: MAX_HEALTH,
            hunger: 0,
            age: 0,
            state,
            diseased: false,
            injured: false,
            death: None,
            caste,
        }
    }

    pub fn queen(id: AntId, config: &SimulationConfig) -> Self {
        Self::with_caste(
            id,
            config.queen_max_age,
            LifeState::Alive,
            Caste::Queen(QueenState::default()),
        )
    }

    pub fn worker(id: AntId, config: &SimulationConfig) -> Self {
        Self::with_caste(
            id,
            config.worker_max_age,
            LifeState::Alive,
            Caste::Worker(WorkerState::default()),
        )
    }

    pub fn soldier(id: AntId, config: &SimulationConfig) -> Self {
        Self::with_caste(id, config.soldier_max_age, LifeState::Alive, Caste::Soldier)
    }

    /// New larva with a future role drawn from the development weights
    pub fn larva(id: AntId, config: &SimulationConfig, rng: &mut impl Rng) -> Self {
        let future = FutureRole::draw(config, rng);
        Self::larva_with_future(id, config, future)
    }

    /// New larva with a fixed future role
    pub fn larva_with_future(id: AntId, config: &SimulationConfig, future: FutureRole) -> Self {
        Self::with_caste(
            id,
            brood::BROOD_MAX_AGE,
            LifeState::Larva,
            Caste::Brood(BroodState::new(future, config)),
        )
    }

    pub fn role(&self) -> Role {
        match &self.caste {
            Caste::Queen(_) => Role::Queen,
            Caste::Worker(_) => Role::Worker,
            Caste::Soldier => Role::Soldier,
            Caste::Brood(brood) => match brood.stage {
                BroodStage::Larva => Role::Larva,
                BroodStage::Pupa => Role::Pupa,
            },
        }
    }

    /// Label used in death statistics ("Worker", "Larva (future soldier)")
    pub fn type_label(&self) -> String {
        match &self.caste {
            Caste::Brood(brood) => format!("{} (future {})", self.role().label(), brood.future.label()),
            _ => self.role().label().to_string(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state != LifeState::Dead
    }

    pub fn future_role(&self) -> Option<FutureRole> {
        self.brood().map(|b| b.future)
    }

    pub fn brood(&self) -> Option<&BroodState> {
        match &self.caste {
            Caste::Brood(brood) => Some(brood),
            _ => None,
        }
    }

    pub fn queen_state(&self) -> Option<&QueenState> {
        match &self.caste {
            Caste::Queen(queen) => Some(queen),
            _ => None,
        }
    }

    pub fn worker_state(&self) -> Option<&WorkerState> {
        match &self.caste {
            Caste::Worker(worker) => Some(worker),
            _ => None,
        }
    }

    /// Perform the role's daily work
    pub fn work(&mut self, day: Day, config: &SimulationConfig, rng: &mut impl Rng) -> WorkOutcome {
        if !self.is_alive() {
            return WorkOutcome::Idle;
        }

        match self.caste {
            Caste::Queen(ref mut queen) => WorkOutcome::EggsLaid(queen.work(config, rng)),
            Caste::Worker(ref mut worker) => WorkOutcome::Foraged(worker.forage(rng)),
            Caste::Soldier => self.patrol(day, config, rng),
            Caste::Brood(_) => self.grow(day, config, rng),
        }
    }

    /// "alive" or "died of <cause> on day <n>"
    pub fn death_info(&self) -> String {
        match &self.death {
            Some(death) => format!("died of {} on day {}", death.cause, death.day),
            None => "alive".to_string(),
        }
    }
}

impl std::fmt::Display for Ant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.death {
            None => write!(
                f,
                "{}(age={}, health={}, state={})",
                self.type_label(),
                self.age,
                self.health,
                self.state
            ),
            Some(death) => write!(
                f,
                "{}(age at death={}, cause={})",
                self.type_label(),
                self.age,
                death.cause
            ),
        }
    }
}

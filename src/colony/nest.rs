//! Colony - the aggregate that owns every ant and drives the daily pipeline

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ant::{Ant, FutureRole, Role};
use crate::colony::events::{EventLog, TickEvent};
use crate::colony::mortality::DeathStatistics;
use crate::colony::output::{
    ColonyStatistics, EventStats, LarvaTypeCounts, PopulationStats, QueenStatus,
};
use crate::colony::systems;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{AntId, Day};

/// Number of events reported as "recent" in statistics
pub const RECENT_EVENTS: usize = 5;

/// A single ant colony
pub struct Colony {
    pub name: String,
    pub config: SimulationConfig,
    pub queen: Ant,
    pub workers: Vec<Ant>,
    pub soldiers: Vec<Ant>,
    pub larvae: Vec<Ant>,
    pub pupae: Vec<Ant>,
    /// Food units in storage, never negative
    pub food_storage: u32,
    /// Days simulated so far
    pub day: Day,
    pub death_stats: DeathStatistics,
    pub events_log: EventLog,
    /// Random number generator (deterministic)
    pub rng: ChaCha8Rng,
    /// Next ant ID to assign
    next_ant_id: u32,
}

impl Colony {
    /// Build a colony seeded for reproducible runs
    pub fn new(name: impl Into<String>, config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::with_rng(name, config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build a colony around an existing generator
    ///
    /// Fails if the configuration does not validate.
    pub fn with_rng(name: impl Into<String>, config: SimulationConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;

        let name = name.into();
        let queen = Ant::queen(AntId(0), &config);
        let mut colony = Self {
            name,
            queen,
            workers: Vec::new(),
            soldiers: Vec::new(),
            larvae: Vec::new(),
            pupae: Vec::new(),
            food_storage: config.initial_food,
            day: 0,
            death_stats: DeathStatistics::new(),
            events_log: EventLog::new(),
            rng,
            next_ant_id: 1,
            config,
        };

        for _ in 0..colony.config.initial_workers {
            colony.spawn_worker();
        }

        tracing::info!(
            "Founded colony '{}' with {} workers and {} food",
            colony.name,
            colony.workers.len(),
            colony.food_storage
        );

        Ok(colony)
    }

    /// Generate a new unique AntId
    pub fn next_ant_id(&mut self) -> AntId {
        let id = AntId(self.next_ant_id);
        self.next_ant_id += 1;
        id
    }

    pub fn spawn_worker(&mut self) -> AntId {
        let id = self.next_ant_id();
        self.workers.push(Ant::worker(id, &self.config));
        id
    }

    pub fn spawn_soldier(&mut self) -> AntId {
        let id = self.next_ant_id();
        self.soldiers.push(Ant::soldier(id, &self.config));
        id
    }

    /// Add `count` larvae with randomly drawn futures
    pub fn add_larvae(&mut self, count: u32) {
        for _ in 0..count {
            let id = self.next_ant_id();
            let larva = Ant::larva(id, &self.config, &mut self.rng);
            self.larvae.push(larva);
        }
    }

    /// Add one larva with a chosen future
    pub fn add_larva_with_future(&mut self, future: FutureRole) -> AntId {
        let id = self.next_ant_id();
        self.larvae.push(Ant::larva_with_future(id, &self.config, future));
        id
    }

    /// Advance the colony by one day
    ///
    /// Phases run strictly in order: raid check, foraging, feeding, egg
    /// laying, larvae, pupae, aging. Adults hatched today join their
    /// collection after the aging pass.
    pub fn simulate_day(&mut self) -> Vec<TickEvent> {
        self.day += 1;
        tracing::info!("Colony '{}': day {}", self.name, self.day);

        let mut events = Vec::new();

        // 1. Random events
        systems::check_for_attack(self, &mut events);

        // 2. Foraging
        systems::collect_food(self, &mut events);

        // 3. Feeding (queen, larvae, adults)
        systems::feed_colony(self, &mut events);

        // 4. Reproduction
        systems::lay_eggs(self, &mut events);

        // 5. Brood development
        systems::process_larvae(self, &mut events);
        let hatchlings = systems::process_pupae(self, &mut events);

        // 6. Aging
        systems::age_colony(self);

        systems::emerge(self, hatchlings);

        events
    }

    /// Record the deaths of ants that have already died
    pub(crate) fn record_deaths<'a>(&mut self, ants: impl IntoIterator<Item = &'a Ant>) {
        for ant in ants {
            match ant.death {
                Some(death) => {
                    self.death_stats.record_death(ant, death.cause, self.day);
                }
                None => tracing::warn!("Ant {} removed without a recorded death", ant.id),
            }
        }
    }

    pub fn live_workers(&self) -> usize {
        self.workers.iter().filter(|a| a.is_alive()).count()
    }

    pub fn live_soldiers(&self) -> usize {
        self.soldiers.iter().filter(|a| a.is_alive()).count()
    }

    /// Living queen, workers and soldiers
    pub fn total_ants(&self) -> usize {
        usize::from(self.queen.is_alive()) + self.live_workers() + self.live_soldiers()
    }

    /// A colony lives while its queen does
    ///
    /// The population clause can never fail on its own: a living queen
    /// already counts as one.
    pub fn is_alive(&self) -> bool {
        self.queen.is_alive() && self.total_ants() > 0
    }

    /// Every ant the colony currently holds
    pub fn all_ants(&self) -> impl Iterator<Item = &Ant> {
        std::iter::once(&self.queen)
            .chain(self.workers.iter())
            .chain(self.soldiers.iter())
            .chain(self.larvae.iter())
            .chain(self.pupae.iter())
    }

    pub fn larva_future_counts(&self) -> LarvaTypeCounts {
        let mut counts = LarvaTypeCounts::default();
        for larva in self.larvae.iter().filter(|l| l.role() == Role::Larva) {
            match larva.future_role() {
                Some(FutureRole::Worker) => counts.worker += 1,
                Some(FutureRole::Soldier) => counts.soldier += 1,
                Some(FutureRole::Drone) => counts.drone += 1,
                None => {}
            }
        }
        counts
    }

    /// Snapshot for reports
    pub fn statistics(&self) -> ColonyStatistics {
        let death_statistics = self.death_stats.summary();
        let total_live = self.total_ants() as u32;
        let queen_state = self.queen.queen_state();
        let (ants_lost, food_lost) = self.events_log.attack_losses();

        ColonyStatistics {
            name: self.name.clone(),
            day: self.day,
            queen: QueenStatus {
                health: self.queen.health,
                age: self.queen.age,
                eggs_laid: queen_state.map(|q| q.eggs_laid).unwrap_or(0),
                is_alive: self.queen.is_alive(),
                death_info: (!self.queen.is_alive()).then(|| self.queen.death_info()),
            },
            population: PopulationStats {
                workers: self.live_workers() as u32,
                soldiers: self.live_soldiers() as u32,
                larvae: self.larvae.len() as u32,
                pupae: self.pupae.len() as u32,
                total_live,
                total_ever_created: total_live + death_statistics.total_deaths,
            },
            larva_types: self.larva_future_counts(),
            death_statistics,
            food: self.food_storage,
            events: EventStats {
                total_events: self.events_log.len() as u32,
                attack_events: self.events_log.attacks().count() as u32,
                successful_defenses: self.events_log.successful_defenses() as u32,
                ants_lost_in_attacks: ants_lost,
                food_lost_in_attacks: food_lost,
                recent_events: self.events_log.recent(RECENT_EVENTS).to_vec(),
            },
        }
    }
}

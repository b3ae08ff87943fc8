//! Attack events - raids on the colony
//!
//! Resolution never touches the colony. It reads the defenders and the food
//! store, and returns an [`AttackOutcome`] naming which ants fall and how
//! much food is lost. The colony applies it afterwards.

use rand::distributions::Open01;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ant::{Ant, DeathCause};

/// Defense contributed by each living soldier
pub const SOLDIER_DEFENSE: f64 = 3.0;
/// Defense contributed by each living worker
pub const WORKER_DEFENSE: f64 = 0.5;
/// Defense multiplier when no soldier is present
pub const UNDEFENDED_PENALTY: f64 = 0.3;
/// Food share lost on a repelled attack, scaled by severity
pub const REPELLED_FOOD_LOSS: f64 = 0.05;
/// Food share lost when raiders break in with no soldier present
pub const UNDEFENDED_FOOD_LOSS: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attacker {
    ForeignAnts,
    Beetles,
    Spiders,
    Rodents,
}

impl Attacker {
    pub const ALL: [Attacker; 4] = [
        Attacker::ForeignAnts,
        Attacker::Beetles,
        Attacker::Spiders,
        Attacker::Rodents,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attacker::ForeignAnts => "Foreign ants",
            Attacker::Beetles => "Beetles",
            Attacker::Spiders => "Spiders",
            Attacker::Rodents => "Rodents",
        }
    }
}

impl std::fmt::Display for Attacker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatLevel {
    Weak,
    Moderate,
    Strong,
}

impl ThreatLevel {
    pub fn of(strength: f64) -> Self {
        if strength < 3.0 {
            ThreatLevel::Weak
        } else if strength < 7.0 {
            ThreatLevel::Moderate
        } else {
            ThreatLevel::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::Weak => "weak",
            ThreatLevel::Moderate => "moderate",
            ThreatLevel::Strong => "strong",
        }
    }
}

/// Which population a casualty came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Post {
    Worker,
    Soldier,
}

/// An ant that falls in the attack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casualty {
    pub post: Post,
    /// Index into the worker or soldier slice given to `resolve`
    pub index: usize,
    pub cause: DeathCause,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttackOutcome {
    pub success: bool,
    pub food_lost: u32,
    pub losses: Vec<Casualty>,
    pub message: String,
}

impl AttackOutcome {
    pub fn fallen(&self, post: Post) -> impl Iterator<Item = usize> + '_ {
        self.losses
            .iter()
            .filter(move |c| c.post == post)
            .map(|c| c.index)
    }
}

/// A single raid, created and resolved within one day
#[derive(Clone, Debug, PartialEq)]
pub struct AttackEvent {
    pub attacker: Attacker,
    /// Uniform in (0.1, 1.0), drawn once
    pub severity: f64,
    pub strength: f64,
}

impl AttackEvent {
    pub fn new(rng: &mut impl Rng) -> Self {
        let severity = 0.1 + 0.9 * rng.sample::<f64, _>(Open01);
        let attacker = *Attacker::ALL.choose(rng).unwrap_or(&Attacker::ForeignAnts);
        let strength = rng.gen_range(1..=10) as f64 * severity;
        Self {
            attacker,
            severity,
            strength,
        }
    }

    pub fn threat(&self) -> ThreatLevel {
        ThreatLevel::of(self.strength)
    }

    pub fn description(&self) -> String {
        format!(
            "{} are preparing a {} attack on the colony",
            self.attacker,
            self.threat().label()
        )
    }

    /// Decide the outcome of the raid against the current defenders
    pub fn resolve(&self, food: u32, workers: &[Ant], soldiers: &[Ant], rng: &mut impl Rng) -> AttackOutcome {
        let live_workers = living_indices(workers);
        let live_soldiers = living_indices(soldiers);
        let defense = defense_strength(live_workers.len(), live_soldiers.len());

        let mut message = if live_soldiers.is_empty() {
            format!("{} attack the colony! There are no soldiers to defend it!", self.attacker)
        } else {
            format!("{} attack the colony! Soldiers join the fight!", self.attacker)
        };

        if defense >= self.strength {
            message.push_str(" The attack was repelled with minimal losses.");

            let food_lost = (food as f64 * REPELLED_FOOD_LOSS * self.severity).floor() as u32;
            let loss_chance = 0.1 + 0.2 * self.severity;
            let losses = live_soldiers
                .into_iter()
                .filter(|_| rng.gen_bool(loss_chance))
                .map(|index| Casualty {
                    post: Post::Soldier,
                    index,
                    cause: DeathCause::KilledInBattle,
                })
                .collect();

            AttackOutcome {
                success: true,
                food_lost,
                losses,
                message,
            }
        } else {
            message.push_str(&format!(" The defense failed! {} broke into the colony.", self.attacker));

            let fraction = if live_soldiers.is_empty() {
                UNDEFENDED_FOOD_LOSS
            } else {
                0.3 + 0.4 * self.severity
            };
            let food_lost = ((food as f64 * fraction).floor() as u32).min(food);

            let mut losses: Vec<Casualty> = sample_losses(&live_workers, 0.2 + 0.3 * self.severity, rng)
                .into_iter()
                .map(|index| Casualty {
                    post: Post::Worker,
                    index,
                    cause: DeathCause::KilledInRaid,
                })
                .collect();
            losses.extend(
                sample_losses(&live_soldiers, 0.5 + 0.4 * self.severity, rng)
                    .into_iter()
                    .map(|index| Casualty {
                        post: Post::Soldier,
                        index,
                        cause: DeathCause::KilledInBattle,
                    }),
            );

            AttackOutcome {
                success: false,
                food_lost,
                losses,
                message,
            }
        }
    }
}

/// Colony defense against a raid
pub fn defense_strength(live_workers: usize, live_soldiers: usize) -> f64 {
    let defense = live_soldiers as f64 * SOLDIER_DEFENSE + live_workers as f64 * WORKER_DEFENSE;
    if live_soldiers == 0 {
        defense * UNDEFENDED_PENALTY
    } else {
        defense
    }
}

fn living_indices(ants: &[Ant]) -> Vec<usize> {
    ants.iter()
        .enumerate()
        .filter(|(_, ant)| ant.is_alive())
        .map(|(i, _)| i)
        .collect()
}

/// Pick `floor(len * fraction)` of `live` without replacement, at least one
fn sample_losses(live: &[usize], fraction: f64, rng: &mut impl Rng) -> Vec<usize> {
    if live.is_empty() {
        return Vec::new();
    }
    let count = ((live.len() as f64 * fraction).floor() as usize).clamp(1, live.len());
    let mut picked: Vec<usize> = live.choose_multiple(rng, count).copied().collect();
    picked.sort_unstable();
    picked
}

//! Reproduction and brood development

use crate::ant::{Ant, FutureRole, Role, WorkOutcome};
use crate::colony::events::TickEvent;
use crate::colony::nest::Colony;
use crate::core::config::SimulationConfig;

/// Queen's daily work; a clutch joins the larvae
pub fn lay_eggs(colony: &mut Colony, events: &mut Vec<TickEvent>) -> u32 {
    let day = colony.day;
    let WorkOutcome::EggsLaid(count) = colony.queen.work(day, &colony.config, &mut colony.rng) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }

    colony.add_larvae(count);
    let total = colony.queen.queen_state().map(|q| q.eggs_laid).unwrap_or(count);
    events.push(TickEvent::EggsLaid { count, total });
    count
}

/// Each larva works then ages; pupated larvae move to the pupae
pub fn process_larvae(colony: &mut Colony, events: &mut Vec<TickEvent>) {
    let day = colony.day;
    let duration = colony.config.larva_growth_duration;
    let mut developing = Vec::with_capacity(colony.larvae.len());
    let mut fallen = Vec::new();

    for mut larva in std::mem::take(&mut colony.larvae) {
        if larva.is_alive() {
            let outcome = larva.work(day, &colony.config, &mut colony.rng);
            larva.age_one_step(day, &colony.config, &mut colony.rng);

            if let Some(future) = larva.future_role() {
                match outcome {
                    WorkOutcome::Grew { progress } => events.push(TickEvent::LarvaGrew {
                        future,
                        progress,
                        duration,
                    }),
                    WorkOutcome::Pupated => events.push(TickEvent::LarvaPupated { future }),
                    WorkOutcome::Starved => events.push(TickEvent::LarvaStarved { future }),
                    _ => {}
                }
            }
        }

        if !larva.is_alive() {
            fallen.push(larva);
        } else if larva.role() == Role::Pupa {
            colony.pupae.push(larva);
        } else {
            developing.push(larva);
        }
    }

    colony.larvae = developing;
    colony.record_deaths(&fallen);
}

/// Each pupa works then ages; finished pupae hatch
///
/// Returns the new adults. They join the colony through [`emerge`] once
/// the day's aging pass is over.
pub fn process_pupae(colony: &mut Colony, events: &mut Vec<TickEvent>) -> Vec<Ant> {
    let day = colony.day;
    let mut remaining = Vec::with_capacity(colony.pupae.len());
    let mut fallen = Vec::new();
    let mut hatchlings = Vec::new();
    let mut dispersed = 0;

    for mut pupa in std::mem::take(&mut colony.pupae) {
        let outcome = pupa.work(day, &colony.config, &mut colony.rng);
        pupa.age_one_step(day, &colony.config, &mut colony.rng);

        if !pupa.is_alive() {
            fallen.push(pupa);
            continue;
        }

        match outcome {
            WorkOutcome::ReadyToHatch(role) => match hatch(&pupa, &colony.config) {
                Some(adult) => {
                    events.push(TickEvent::Hatched { role });
                    hatchlings.push(adult);
                }
                None => {
                    dispersed += 1;
                    events.push(TickEvent::DroneLeft);
                }
            },
            _ => remaining.push(pupa),
        }
    }

    colony.pupae = remaining;
    colony.record_deaths(&fallen);

    if !hatchlings.is_empty() {
        let workers = hatchlings.iter().filter(|a| a.role() == Role::Worker).count() as u32;
        let soldiers = hatchlings.len() as u32 - workers;
        tracing::info!(
            "Day {}: {} workers and {} soldiers hatched, {} drones left",
            day,
            workers,
            soldiers,
            dispersed
        );
        events.push(TickEvent::HatchSummary { workers, soldiers });
    }

    hatchlings
}

/// The adult a finished pupa turns into; drones leave the colony
///
/// The adult keeps the pupa's id and starts fresh.
pub fn hatch(pupa: &Ant, config: &SimulationConfig) -> Option<Ant> {
    match pupa.future_role()? {
        FutureRole::Worker => Some(Ant::worker(pupa.id, config)),
        FutureRole::Soldier => Some(Ant::soldier(pupa.id, config)),
        FutureRole::Drone => None,
    }
}

/// Add hatched adults to their collections
pub fn emerge(colony: &mut Colony, hatchlings: Vec<Ant>) {
    for adult in hatchlings {
        match adult.role() {
            Role::Soldier => colony.soldiers.push(adult),
            _ => colony.workers.push(adult),
        }
    }
}

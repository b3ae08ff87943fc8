//! Raids on the colony

use rand::Rng;

use crate::ant::{Ant, WorkOutcome};
use crate::colony::attack::{AttackEvent, AttackOutcome, Post};
use crate::colony::events::{ColonyEventKind, TickEvent};
use crate::colony::nest::Colony;
use crate::colony::systems::remove_dead;

/// Roll for a raid; once the colony is old enough, at most one per day
pub fn check_for_attack(colony: &mut Colony, events: &mut Vec<TickEvent>) -> Option<AttackOutcome> {
    if colony.day < colony.config.min_days_for_attack {
        return None;
    }
    if !colony.rng.gen_bool(colony.config.attack_chance) {
        return None;
    }

    let attack = AttackEvent::new(&mut colony.rng);
    Some(handle_attack(colony, &attack, events))
}

/// Resolve `attack` against the colony and apply the outcome
///
/// Fallen ants die immediately and are removed from their collection.
/// Surviving soldiers then take a combat-wear roll; a soldier worn down to
/// zero health dies of injury and is removed and recorded here as well.
pub fn handle_attack(colony: &mut Colony, attack: &AttackEvent, events: &mut Vec<TickEvent>) -> AttackOutcome {
    let day = colony.day;
    tracing::info!("{}", attack.description());
    events.push(TickEvent::AttackAnnounced {
        attacker: attack.attacker,
        threat: attack.threat(),
    });

    let outcome = attack.resolve(colony.food_storage, &colony.workers, &colony.soldiers, &mut colony.rng);
    colony.food_storage = colony.food_storage.saturating_sub(outcome.food_lost);

    for casualty in &outcome.losses {
        let ants = match casualty.post {
            Post::Worker => &mut colony.workers,
            Post::Soldier => &mut colony.soldiers,
        };
        if let Some(ant) = ants.get_mut(casualty.index) {
            ant.die(casualty.cause, day);
        }
    }

    let fallen_workers = remove_dead(&mut colony.workers);
    let fallen_soldiers = remove_dead(&mut colony.soldiers);

    // Combat wear on whoever is left standing
    let mut worn = 0;
    for soldier in colony.soldiers.iter_mut() {
        if let WorkOutcome::Patrolled { injured: true } = soldier.work(day, &colony.config, &mut colony.rng) {
            worn += 1;
        }
    }
    if worn > 0 {
        tracing::debug!("{} soldiers wounded after the fight", worn);
    }
    let worn_out = remove_dead(&mut colony.soldiers);
    if !worn_out.is_empty() {
        tracing::info!("Day {}: {} soldiers succumbed to their wounds", day, worn_out.len());
    }

    let losses = loss_breakdown(&fallen_workers, &fallen_soldiers);
    let ants_lost = (fallen_workers.len() + fallen_soldiers.len()) as u32;

    colony.record_deaths(fallen_workers.iter().chain(&fallen_soldiers).chain(&worn_out));
    colony.events_log.add_event(
        ColonyEventKind::Attack {
            attacker: attack.attacker,
            success: outcome.success,
            food_lost: outcome.food_lost,
            ants_lost,
        },
        day,
        outcome.message.clone(),
    );

    tracing::info!(
        "Day {}: {} (lost {} food, {} ants)",
        day,
        outcome.message,
        outcome.food_lost,
        ants_lost
    );

    events.push(TickEvent::AttackResolved {
        success: outcome.success,
        message: outcome.message.clone(),
        food_lost: outcome.food_lost,
        food_remaining: colony.food_storage,
        losses,
        soldiers_left: colony.live_soldiers() as u32,
    });

    if colony.soldiers.is_empty() {
        tracing::warn!("Colony '{}' has no soldiers left to defend it", colony.name);
        events.push(TickEvent::NoDefendersLeft);
    }

    outcome
}

/// (type label, count) pairs, workers first
fn loss_breakdown(workers: &[Ant], soldiers: &[Ant]) -> Vec<(String, u32)> {
    [workers, soldiers]
        .into_iter()
        .filter(|fallen| !fallen.is_empty())
        .map(|fallen| (fallen[0].type_label(), fallen.len() as u32))
        .collect()
}

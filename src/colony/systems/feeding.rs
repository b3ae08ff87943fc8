//! Feeding - queen first, then larvae, then adults

use crate::colony::events::TickEvent;
use crate::colony::nest::Colony;

/// Food handed to the queen each day
pub const QUEEN_RATION: u32 = 3;
/// Hunger relieved per larva meal
pub const LARVA_MEAL: u32 = 15;
/// Hunger relieved per adult meal
pub const ADULT_MEAL: u32 = 10;
/// Stored food spent per larva or adult meal
pub const MEAL_COST: u32 = 1;

/// Feed the colony from storage, best effort, stopping when food runs out
pub fn feed_colony(colony: &mut Colony, events: &mut Vec<TickEvent>) {
    if colony.queen.is_alive() && colony.food_storage >= QUEEN_RATION {
        colony.queen.receive_food(QUEEN_RATION, &colony.config);
        colony.food_storage -= QUEEN_RATION;
        events.push(TickEvent::QueenFed { amount: QUEEN_RATION });
    }

    for larva in colony.larvae.iter_mut().filter(|l| l.is_alive()) {
        if colony.food_storage < MEAL_COST {
            break;
        }
        larva.feed(LARVA_MEAL, &colony.config);
        colony.food_storage -= MEAL_COST;
    }

    let adults = colony.workers.iter_mut().chain(colony.soldiers.iter_mut());
    for ant in adults.filter(|a| a.is_alive()) {
        if colony.food_storage < MEAL_COST {
            break;
        }
        ant.feed(ADULT_MEAL, &colony.config);
        colony.food_storage -= MEAL_COST;
    }

    if colony.food_storage == 0 {
        tracing::debug!("Colony '{}' ran out of food on day {}", colony.name, colony.day);
    }
}

//! Daily pipeline phases
//!
//! Each phase takes the colony by `&mut` and pushes narrative events. Phases
//! never remove from a collection while walking it: they classify first and
//! then rebuild the surviving collection.

mod aging;
mod brood;
mod feeding;
mod foraging;
mod raids;

pub use aging::age_colony;
pub use brood::{emerge, hatch, lay_eggs, process_larvae, process_pupae};
pub use feeding::{feed_colony, ADULT_MEAL, LARVA_MEAL, MEAL_COST, QUEEN_RATION};
pub use foraging::collect_food;
pub use raids::{check_for_attack, handle_attack};

use crate::ant::Ant;

/// Take the dead out of `ants`, keeping the order of the living
pub(crate) fn remove_dead(ants: &mut Vec<Ant>) -> Vec<Ant> {
    let (dead, living): (Vec<Ant>, Vec<Ant>) = std::mem::take(ants)
        .into_iter()
        .partition(|ant| !ant.is_alive());
    *ants = living;
    dead
}

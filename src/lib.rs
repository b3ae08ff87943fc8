//! Ant Colony - discrete-time simulation of an ant colony
//!
//! A queen, workers, soldiers and brood advance one day at a time. Each day
//! runs a fixed pipeline: raids, foraging, feeding, egg laying, brood
//! development and aging. Every death lands in a single ledger.

pub mod ant;
pub mod colony;
pub mod core;
pub mod report;

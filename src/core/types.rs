//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation day counter (one colony tick)
pub type Day = u32;

/// Unique identifier for an ant within its colony
///
/// Brood keep their id through pupation and hatching, so one id follows
/// one organism from egg to death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AntId(pub u32);

impl AntId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AntId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

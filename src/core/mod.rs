//! Core engine types: identifiers, RNG, configuration.
//!
//! These are shared by every other module and carry no game rules.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{CardId, Generation, MatchKey};
pub use rng::{GameRng, GameRngState};
pub use config::{Difficulty, EngineConfig, Timings};

//! Core infrastructure: RNG and configuration.

pub mod config;
pub mod rng;

pub use config::EngineConfig;
pub use rng::{GameRng, GameRngState};

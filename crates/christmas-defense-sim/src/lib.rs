//! Simulation engine for Christmas Defense.
//!
//! Owns the hecs ECS world, runs systems once per frame with a clamped
//! delta, and produces GameStateSnapshots for render and UI layers.

pub mod clock;
pub mod engine;
pub mod ledger;
pub mod placement;
pub mod projectile;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use christmas_defense_core as core;
pub use clock::FrameClock;
pub use engine::{SimConfig, SimulationEngine};

//! Christmas Defense driver.
//!
//! Wires the simulation crates into a runnable program: a threaded game
//! loop with shared state for polling, a scripted player and the CLI.

pub mod autopilot;
pub mod cli;
pub mod game_loop;
pub mod state;

pub use christmas_defense_core as core;

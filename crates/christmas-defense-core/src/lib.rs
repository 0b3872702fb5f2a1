//! Core types and definitions for the Christmas Defense simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, components, commands, level definitions, state snapshots,
//! events, and constants. It has no ECS or runtime dependency.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

//! Player commands sent from the input layer to the simulation.
//!
//! Commands are validated and applied at the next tick boundary.
//! Invalid commands are rejected without changing any state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Buy a tower and place it on the centre of tile (`tile_x`, `tile_y`).
    PlaceTower {
        tile_x: i32,
        tile_y: i32,
        tower: TowerType,
    },
    /// Slow every enemy on the field for a few seconds.
    CastBlizzard,
    /// Load the next level after a level has been completed.
    AdvanceLevel,
}

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Run is not active ({0:?})")]
    NotActive(GamePhase),
    #[error("Tile ({tile_x}, {tile_y}) is outside the playfield")]
    OutOfBounds { tile_x: i32, tile_y: i32 },
    #[error("Tile ({tile_x}, {tile_y}) is too close to the path")]
    OnPath { tile_x: i32, tile_y: i32 },
    #[error("Tile ({tile_x}, {tile_y}) is already occupied")]
    Occupied { tile_x: i32, tile_y: i32 },
    #[error("Not enough cookies: need {cost}, have {available}")]
    InsufficientFunds { cost: u32, available: u32 },
    #[error("Blizzard is recharging ({remaining_secs:.1}s left)")]
    AbilityOnCooldown { remaining_secs: f64 },
    #[error("No level completed to advance from ({0:?})")]
    NoLevelToAdvance(GamePhase),
}

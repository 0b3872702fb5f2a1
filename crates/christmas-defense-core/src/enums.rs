//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Gingerbread goon: baseline speed and health.
    #[default]
    Normal,
    /// Slow, heavy, regenerates health over time.
    Tank,
    /// Quick and fragile.
    Fast,
}

/// Terminal state of an enemy. `Dead` and `ReachedEnd` are mutually exclusive
/// and, once entered, never left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyFate {
    #[default]
    Alive,
    /// Health dropped to zero; the reward has been credited.
    Dead,
    /// Walked off the end of the path; a life has been taken.
    ReachedEnd,
}

/// Tower type tag, used by commands, costs, and views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerType {
    /// Candy cane cannon (direct damage).
    #[default]
    Cannon,
    /// Frost tower (area slow).
    Frost,
    /// Snowball mortar (splash).
    Mortar,
}

/// Projectile type tag for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileType {
    Homing,
    Area,
}

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running.
    #[default]
    Active,
    /// All waves of a non-final level cleared; waiting for `AdvanceLevel`.
    LevelComplete,
    /// All waves of the final level cleared.
    Victory,
    /// Lives ran out.
    Defeat,
}

impl EnemyFate {
    pub fn is_alive(self) -> bool {
        self == EnemyFate::Alive
    }
}

impl TowerType {
    /// Purchase price in cookies.
    pub fn cost(self) -> u32 {
        match self {
            TowerType::Cannon => CANNON_COST,
            TowerType::Frost => FROST_COST,
            TowerType::Mortar => MORTAR_COST,
        }
    }
}

impl GamePhase {
    /// Win or loss: nothing will ever change again.
    pub fn is_game_over(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }

    pub fn is_win(self) -> bool {
        self == GamePhase::Victory
    }
}

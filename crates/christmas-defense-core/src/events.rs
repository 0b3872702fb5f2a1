//! Events emitted by the simulation for render, audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { kind: EnemyKind },
    /// Enemy killed; `reward` cookies were credited.
    EnemyKilled {
        kind: EnemyKind,
        position: Position,
        reward: u32,
    },
    /// Enemy reached the workshop and took a life.
    EnemyLeaked { kind: EnemyKind, lives_left: u32 },
    ShotFired { tower: TowerType, from: Position },
    /// A homing shot whose target was gone before it landed.
    ShotWasted { position: Position },
    /// An area shot landed; `hits` enemies were inside the splash radius.
    Explosion {
        position: Position,
        radius: f64,
        hits: u32,
    },
    TowerPlaced { tower: TowerType, position: Position },
    BlizzardCast { affected: u32 },
    WaveStarted { level: usize, wave: u32, enemies: u32 },
    LevelComplete { level: usize, bonus: u32 },
    Victory,
    Defeat,
}

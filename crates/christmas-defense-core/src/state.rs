//! Game state snapshot: the complete visible state handed to render/UI each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each tick. Read-only for consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub path: PathView,
    /// Live enemies in spawn order.
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
}

/// Counters for the UI layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub cookies: u32,
    pub lives: u32,
    /// 1-based level number.
    pub level: usize,
    pub level_count: usize,
    pub level_name: String,
    pub wave: u32,
    pub max_waves: u32,
    /// Enemies still queued for the current wave.
    pub pending_spawns: u32,
    /// Seconds until Blizzard can be cast again (0 when ready).
    pub blizzard_cooldown: f64,
    pub enemies_killed: u32,
    pub enemies_leaked: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathView {
    pub waypoints: Vec<Position>,
    pub corridor_width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub spawn_order: u64,
    pub kind: EnemyKind,
    pub position: Position,
    /// 0.0 - 1.0
    pub health_ratio: f64,
    pub slowed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub tower: TowerType,
    pub position: Position,
    pub range: f64,
    pub cooldown: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileType,
    pub position: Position,
    /// Splash radius while an area shot is exploding.
    pub explosion_radius: Option<f64>,
}

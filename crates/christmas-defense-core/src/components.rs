//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems, not components;
//! the few methods here are read-only queries.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// An enemy walking the path toward Santa's workshop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Speed before slow effects (pixels/second).
    pub base_speed: f64,
    /// 1.0 when unaffected, below 1.0 while slowed.
    pub speed_multiplier: f64,
    /// Seconds of slow left; the multiplier resets when this reaches zero.
    pub slow_remaining: f64,
    pub max_health: f64,
    pub health: f64,
    /// Health regained per second (tanks only).
    pub regen_per_sec: f64,
    /// Cookies credited on death.
    pub reward: u32,
    pub fate: EnemyFate,
}

/// Index of the waypoint the enemy last passed.
/// The enemy is heading toward `index + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathProgress {
    pub index: usize,
}

/// Monotonic spawn number. Ordering by it yields the live-enemy iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub weapon: TowerWeapon,
    /// Targeting radius (pixels).
    pub range: f64,
    /// Shots per second. Unused by the frost aura.
    pub fire_rate: f64,
    /// Seconds until the next shot may fire.
    pub cooldown: f64,
}

/// Variant-specific tower parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TowerWeapon {
    /// Fires homing shots at one target.
    Cannon { damage: f64, projectile_speed: f64 },
    /// Slows every enemy in range, every tick.
    Frost { slow_factor: f64, slow_duration: f64 },
    /// Lobs area shots at the target's position at launch time.
    Mortar {
        damage: f64,
        splash_radius: f64,
        projectile_speed: f64,
    },
}

impl Enemy {
    pub fn is_dead(&self) -> bool {
        self.fate == EnemyFate::Dead
    }

    pub fn reached_end(&self) -> bool {
        self.fate == EnemyFate::ReachedEnd
    }

    /// Current speed including slow effects.
    pub fn current_speed(&self) -> f64 {
        self.base_speed * self.speed_multiplier
    }

    /// Health as a fraction of max health, clamped to [0, 1].
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

impl TowerWeapon {
    pub fn tower_type(&self) -> TowerType {
        match self {
            TowerWeapon::Cannon { .. } => TowerType::Cannon,
            TowerWeapon::Frost { .. } => TowerType::Frost,
            TowerWeapon::Mortar { .. } => TowerType::Mortar,
        }
    }
}

//! Projectile data model.
//!
//! Lives in the sim crate rather than core because homing shots hold a
//! hecs `Entity` handle to their target.

use christmas_defense_core::enums::ProjectileType;
use christmas_defense_core::types::Position;

/// A shot in flight (or exploding).
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Pixels per second.
    pub speed: f64,
    pub damage: f64,
    /// Once set the projectile is never updated again and is purged at cleanup.
    pub dead: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum ProjectileKind {
    /// Chases the target's current position every tick. A despawned
    /// target entity resolves to "no longer present".
    Homing { target: hecs::Entity },
    /// Flies to a fixed point and splashes everything around it once.
    Area {
        impact: Position,
        splash_radius: f64,
        phase: AreaPhase,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaPhase {
    InFlight,
    /// Splash already applied; purged when `remaining` elapses.
    Exploding { remaining: f64 },
}

impl Projectile {
    pub fn homing(target: hecs::Entity, speed: f64, damage: f64) -> Self {
        Self {
            kind: ProjectileKind::Homing { target },
            speed,
            damage,
            dead: false,
        }
    }

    pub fn area(impact: Position, splash_radius: f64, speed: f64, damage: f64) -> Self {
        Self {
            kind: ProjectileKind::Area {
                impact,
                splash_radius,
                phase: AreaPhase::InFlight,
            },
            speed,
            damage,
            dead: false,
        }
    }

    pub fn projectile_type(&self) -> ProjectileType {
        match self.kind {
            ProjectileKind::Homing { .. } => ProjectileType::Homing,
            ProjectileKind::Area { .. } => ProjectileType::Area,
        }
    }

    /// Splash radius while exploding, `None` otherwise.
    pub fn explosion_radius(&self) -> Option<f64> {
        match self.kind {
            ProjectileKind::Area {
                splash_radius,
                phase: AreaPhase::Exploding { .. },
                ..
            } => Some(splash_radius),
            _ => None,
        }
    }
}

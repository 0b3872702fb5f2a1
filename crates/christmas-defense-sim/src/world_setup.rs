//! Entity spawn factories.
//!
//! Creates enemy, tower and projectile entities with the appropriate
//! component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use christmas_defense_core::components::*;
use christmas_defense_core::constants::*;
use christmas_defense_core::enums::*;
use christmas_defense_core::level::LevelDefinition;
use christmas_defense_core::types::Position;

use crate::projectile::Projectile;

/// Spawn an enemy of `kind` at the start of the level's path.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    wave: u32,
    level: &LevelDefinition,
    order: u64,
) -> hecs::Entity {
    let enemy = build_enemy(rng, kind, wave, level.difficulty);
    world.spawn((
        enemy,
        level.path.start(),
        PathProgress::default(),
        SpawnOrder(order),
    ))
}

/// Roll stats for a fresh enemy. Speed gets a random jitter; health scales
/// with the wave number and the level difficulty.
pub fn build_enemy(rng: &mut ChaCha8Rng, kind: EnemyKind, wave: u32, difficulty: f64) -> Enemy {
    let (base_speed, jitter, base_health, health_per_wave, regen_per_sec, reward) =
        enemy_kind_params(kind);

    let waves_in = wave.saturating_sub(1) as f64;
    let max_health = ((base_health + health_per_wave * waves_in) * difficulty)
        .round()
        .max(1.0);

    Enemy {
        kind,
        base_speed: base_speed + rng.gen_range(0.0..jitter),
        speed_multiplier: 1.0,
        slow_remaining: 0.0,
        max_health,
        health: max_health,
        regen_per_sec,
        reward,
        fate: EnemyFate::Alive,
    }
}

/// Spawn a tower of the given type centred on `position`.
pub fn spawn_tower(world: &mut World, tower_type: TowerType, position: Position) -> hecs::Entity {
    world.spawn((build_tower(tower_type), position))
}

/// Default parameters for each tower type.
pub fn build_tower(tower_type: TowerType) -> Tower {
    match tower_type {
        TowerType::Cannon => Tower {
            weapon: TowerWeapon::Cannon {
                damage: CANNON_DAMAGE,
                projectile_speed: CANNON_PROJECTILE_SPEED,
            },
            range: CANNON_RANGE,
            fire_rate: CANNON_FIRE_RATE,
            cooldown: 0.0,
        },
        TowerType::Frost => Tower {
            weapon: TowerWeapon::Frost {
                slow_factor: FROST_SLOW_FACTOR,
                slow_duration: FROST_SLOW_DURATION,
            },
            range: FROST_RANGE,
            fire_rate: 0.0,
            cooldown: 0.0,
        },
        TowerType::Mortar => Tower {
            weapon: TowerWeapon::Mortar {
                damage: MORTAR_DAMAGE,
                splash_radius: MORTAR_SPLASH_RADIUS,
                projectile_speed: MORTAR_PROJECTILE_SPEED,
            },
            range: MORTAR_RANGE,
            fire_rate: MORTAR_FIRE_RATE,
            cooldown: 0.0,
        },
    }
}

/// Spawn a projectile at `origin`.
pub fn spawn_projectile(
    world: &mut World,
    projectile: Projectile,
    origin: Position,
    order: u64,
) -> hecs::Entity {
    world.spawn((projectile, origin, SpawnOrder(order)))
}

/// Stats for an enemy kind:
/// (base speed, speed jitter, base health, health per wave, regen/s, reward).
fn enemy_kind_params(kind: EnemyKind) -> (f64, f64, f64, f64, f64, u32) {
    match kind {
        EnemyKind::Normal => (
            NORMAL_BASE_SPEED,
            NORMAL_SPEED_JITTER,
            NORMAL_BASE_HEALTH,
            NORMAL_HEALTH_PER_WAVE,
            0.0,
            NORMAL_REWARD,
        ),
        EnemyKind::Tank => (
            TANK_BASE_SPEED,
            TANK_SPEED_JITTER,
            TANK_BASE_HEALTH,
            TANK_HEALTH_PER_WAVE,
            TANK_REGEN_PER_SEC,
            TANK_REWARD,
        ),
        EnemyKind::Fast => (
            FAST_BASE_SPEED,
            FAST_SPEED_JITTER,
            FAST_BASE_HEALTH,
            FAST_HEALTH_PER_WAVE,
            0.0,
            FAST_REWARD,
        ),
    }
}

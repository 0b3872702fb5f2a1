//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use christmas_defense_core::components::*;
use christmas_defense_core::enums::GamePhase;
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::state::*;
use christmas_defense_core::types::{Position, SimTime};

use crate::projectile::Projectile;

/// Engine-owned values that are not stored in the world.
pub struct RunView<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub path: &'a [Position],
    pub corridor_width: f64,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, run: RunView<'_>, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: run.time,
        phase: run.phase,
        hud: run.hud,
        path: PathView {
            waypoints: run.path.to_vec(),
            corridor_width: run.corridor_width,
        },
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Enemies still in the world, in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &SpawnOrder)>()
        .iter()
        .map(|(_, (enemy, position, order))| EnemyView {
            spawn_order: order.0,
            kind: enemy.kind,
            position: *position,
            health_ratio: enemy.health_ratio(),
            slowed: enemy.speed_multiplier < 1.0,
        })
        .collect();
    enemies.sort_by_key(|e| e.spawn_order);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (tower, position))| TowerView {
            tower: tower.weapon.tower_type(),
            position: *position,
            range: tower.range,
            cooldown: tower.cooldown,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u64, ProjectileView)> = world
        .query::<(&Projectile, &Position, &SpawnOrder)>()
        .iter()
        .filter(|(_, (projectile, _, _))| !projectile.dead)
        .map(|(_, (projectile, position, order))| {
            (
                order.0,
                ProjectileView {
                    kind: projectile.projectile_type(),
                    position: *position,
                    explosion_radius: projectile.explosion_radius(),
                },
            )
        })
        .collect();
    projectiles.sort_by_key(|(order, _)| *order);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

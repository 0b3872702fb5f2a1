//! Cleanup system: removes enemies that died or reached the end, and spent projectiles.

use hecs::{Entity, World};

use christmas_defense_core::components::Enemy;

use crate::projectile::Projectile;

/// Despawn every terminal entity.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.fate.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.dead {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Number of enemies still in the world.
pub fn remaining_enemies(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

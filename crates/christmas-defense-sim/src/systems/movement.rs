//! Enemy movement system.
//!
//! Walks every live enemy along the level path, ticks slow effects down,
//! applies regeneration, and resolves arrivals at the workshop.

use hecs::World;

use christmas_defense_core::components::{Enemy, PathProgress};
use christmas_defense_core::constants::{WAYPOINT_ARRIVE_DISTANCE, WAYPOINT_SNAP_EPSILON};
use christmas_defense_core::enums::EnemyFate;
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::types::Position;

use crate::ledger::Ledger;
use crate::systems::targeting::enemies_in_spawn_order;

/// Result of advancing one enemy by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still walking (or already terminal, in which case nothing happened).
    Walking,
    /// Ran out of path this tick; the enemy is now `ReachedEnd`.
    Arrived,
}

/// Advance all enemies in spawn order.
///
/// Returns true if lives ran out. Processing stops at that enemy: the rest
/// of the tick's movement is frozen.
pub fn run(
    world: &mut World,
    waypoints: &[Position],
    dt: f64,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) -> bool {
    for entity in enemies_in_spawn_order(world) {
        let Ok((enemy, position, progress)) =
            world.query_one_mut::<(&mut Enemy, &mut Position, &mut PathProgress)>(entity)
        else {
            continue;
        };

        if step_enemy(enemy, position, progress, waypoints, dt) == StepOutcome::Arrived {
            let lives_left = ledger.take_life();
            events.push(GameEvent::EnemyLeaked {
                kind: enemy.kind,
                lives_left,
            });
            if lives_left == 0 {
                return true;
            }
        }
    }
    false
}

/// Advance a single enemy by `dt` seconds.
pub fn step_enemy(
    enemy: &mut Enemy,
    position: &mut Position,
    progress: &mut PathProgress,
    waypoints: &[Position],
    dt: f64,
) -> StepOutcome {
    if !enemy.fate.is_alive() {
        return StepOutcome::Walking;
    }

    if enemy.slow_remaining > 0.0 {
        enemy.slow_remaining -= dt;
        if enemy.slow_remaining <= 0.0 {
            enemy.slow_remaining = 0.0;
            enemy.speed_multiplier = 1.0;
        }
    }

    let next = progress.index + 1;
    let Some(target) = waypoints.get(next) else {
        enemy.fate = EnemyFate::ReachedEnd;
        return StepOutcome::Arrived;
    };

    let dist = position.distance_to(target);
    if dist < WAYPOINT_ARRIVE_DISTANCE {
        progress.index = next;
    } else {
        let step = dist.min(enemy.current_speed() * dt);
        *position = position.step_toward(target, step);
        // Snap within epsilon so low frame rates cannot oscillate around a waypoint.
        if step >= dist - WAYPOINT_SNAP_EPSILON {
            progress.index = next;
        }
    }

    if enemy.regen_per_sec > 0.0 {
        enemy.health = (enemy.health + enemy.regen_per_sec * dt).min(enemy.max_health);
    }

    StepOutcome::Walking
}

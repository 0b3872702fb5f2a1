//! Projectile system. Homing shots chase their target; area shots land and splash.

use hecs::{Entity, World};

use christmas_defense_core::components::{Enemy, SpawnOrder};
use christmas_defense_core::constants::{EXPLOSION_DURATION, PROJECTILE_HIT_EPSILON};
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::types::Position;

use crate::ledger::Ledger;
use crate::projectile::{AreaPhase, Projectile, ProjectileKind};
use crate::systems::damage::damage_entity;
use crate::systems::targeting::{all_in_range, live_enemies};

/// Advance every live projectile by `dt`, in spawn order.
pub fn run(world: &mut World, dt: f64, ledger: &mut Ledger, events: &mut Vec<GameEvent>) {
    for entity in projectiles_in_spawn_order(world) {
        let (mut projectile, mut position) =
            match world.query_one_mut::<(&Projectile, &Position)>(entity) {
                Ok((p, pos)) => (*p, *pos),
                Err(_) => continue,
            };
        if projectile.dead {
            continue;
        }

        match projectile.kind {
            ProjectileKind::Homing { target } => {
                step_homing(world, &mut projectile, &mut position, target, dt, ledger, events);
            }
            ProjectileKind::Area {
                impact,
                splash_radius,
                phase,
            } => {
                let phase = step_area(
                    world,
                    &mut projectile,
                    &mut position,
                    impact,
                    splash_radius,
                    phase,
                    dt,
                    ledger,
                    events,
                );
                if let ProjectileKind::Area { phase: p, .. } = &mut projectile.kind {
                    *p = phase;
                }
            }
        }

        if let Ok((p, pos)) = world.query_one_mut::<(&mut Projectile, &mut Position)>(entity) {
            *p = projectile;
            *pos = position;
        }
    }
}

fn step_homing(
    world: &mut World,
    projectile: &mut Projectile,
    position: &mut Position,
    target: Entity,
    dt: f64,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) {
    // Re-validate the target every tick: it may have died, arrived, or been purged.
    let target_pos = match world.query_one_mut::<(&Enemy, &Position)>(target) {
        Ok((enemy, pos)) if enemy.fate.is_alive() => *pos,
        _ => {
            projectile.dead = true;
            events.push(GameEvent::ShotWasted {
                position: *position,
            });
            return;
        }
    };

    let step = projectile.speed * dt;
    if position.distance_to(&target_pos) <= step + PROJECTILE_HIT_EPSILON {
        damage_entity(world, target, projectile.damage, ledger, events);
        *position = target_pos;
        projectile.dead = true;
        return;
    }
    *position = position.step_toward(&target_pos, step);
}

#[allow(clippy::too_many_arguments)]
fn step_area(
    world: &mut World,
    projectile: &mut Projectile,
    position: &mut Position,
    impact: Position,
    splash_radius: f64,
    phase: AreaPhase,
    dt: f64,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) -> AreaPhase {
    match phase {
        AreaPhase::InFlight => {
            let step = projectile.speed * dt;
            if position.distance_to(&impact) <= step + PROJECTILE_HIT_EPSILON {
                *position = impact;
                let hits = splash(world, &impact, splash_radius, projectile.damage, ledger, events);
                events.push(GameEvent::Explosion {
                    position: impact,
                    radius: splash_radius,
                    hits,
                });
                AreaPhase::Exploding {
                    remaining: EXPLOSION_DURATION,
                }
            } else {
                *position = position.step_toward(&impact, step);
                AreaPhase::InFlight
            }
        }
        AreaPhase::Exploding { remaining } => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                projectile.dead = true;
            }
            AreaPhase::Exploding {
                remaining: remaining.max(0.0),
            }
        }
    }
}

/// Damage every live enemy within `radius` of `center` exactly once.
/// Returns the number of enemies hit.
pub fn splash(
    world: &mut World,
    center: &Position,
    radius: f64,
    damage: f64,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let victims: Vec<Entity> = all_in_range(&live_enemies(world), center, radius)
        .map(|c| c.entity)
        .collect();
    let mut hits = 0;
    for entity in victims {
        if damage_entity(world, entity, damage, ledger, events) {
            hits += 1;
        }
    }
    hits
}

fn projectiles_in_spawn_order(world: &World) -> Vec<Entity> {
    let mut ordered: Vec<(SpawnOrder, Entity)> = world
        .query::<(&Projectile, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_projectile, order))| (*order, entity))
        .collect();
    ordered.sort_unstable_by_key(|(order, _)| *order);
    ordered.into_iter().map(|(_, entity)| entity).collect()
}

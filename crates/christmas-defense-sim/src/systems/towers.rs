//! Tower system: target acquisition, firing and the frost aura.

use hecs::{Entity, World};

use christmas_defense_core::components::{Enemy, Tower, TowerWeapon};
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::types::Position;

use crate::ledger::Ledger;
use crate::projectile::Projectile;
use crate::systems::targeting::{all_in_range, first_in_range, live_enemies};
use crate::world_setup;

/// Deferred effect of one tower, applied after the tower query is released.
enum TowerAction {
    Fire {
        projectile: Projectile,
        origin: Position,
        tower: TowerWeapon,
    },
    Slow {
        target: Entity,
        factor: f64,
        duration: f64,
    },
}

/// Run every tower for one tick.
pub fn run(
    world: &mut World,
    dt: f64,
    next_order: &mut u64,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) {
    let candidates = live_enemies(world);
    let mut actions: Vec<TowerAction> = Vec::new();

    for (_entity, (tower, position)) in world.query_mut::<(&mut Tower, &Position)>() {
        match tower.weapon {
            TowerWeapon::Frost {
                slow_factor,
                slow_duration,
            } => {
                for c in all_in_range(&candidates, position, tower.range) {
                    actions.push(TowerAction::Slow {
                        target: c.entity,
                        factor: slow_factor,
                        duration: slow_duration,
                    });
                }
            }
            TowerWeapon::Cannon {
                damage,
                projectile_speed,
            } => {
                if !cool_down(tower, dt) {
                    continue;
                }
                if let Some(target) = first_in_range(&candidates, position, tower.range) {
                    actions.push(TowerAction::Fire {
                        projectile: Projectile::homing(target.entity, projectile_speed, damage),
                        origin: *position,
                        tower: tower.weapon,
                    });
                    tower.cooldown = reload_time(tower.fire_rate);
                }
            }
            TowerWeapon::Mortar {
                damage,
                splash_radius,
                projectile_speed,
            } => {
                if !cool_down(tower, dt) {
                    continue;
                }
                if let Some(target) = first_in_range(&candidates, position, tower.range) {
                    // Aimed at where the target stands now; never re-aimed.
                    actions.push(TowerAction::Fire {
                        projectile: Projectile::area(
                            target.position,
                            splash_radius,
                            projectile_speed,
                            damage,
                        ),
                        origin: *position,
                        tower: tower.weapon,
                    });
                    tower.cooldown = reload_time(tower.fire_rate);
                }
            }
        }
    }

    for action in actions {
        match action {
            TowerAction::Fire {
                projectile,
                origin,
                tower,
            } => {
                world_setup::spawn_projectile(world, projectile, origin, *next_order);
                *next_order += 1;
                ledger.shots_fired += 1;
                events.push(GameEvent::ShotFired {
                    tower: tower.tower_type(),
                    from: origin,
                });
            }
            TowerAction::Slow {
                target,
                factor,
                duration,
            } => {
                if let Ok(mut enemy) = world.get::<&mut Enemy>(target) {
                    apply_slow(&mut enemy, factor, duration);
                }
            }
        }
    }
}

/// Set (not stack) a slow effect and re-arm its timer.
pub fn apply_slow(enemy: &mut Enemy, factor: f64, duration: f64) {
    if !enemy.fate.is_alive() {
        return;
    }
    enemy.speed_multiplier = factor;
    enemy.slow_remaining = duration;
}

/// Tick the cooldown down, clamped at zero. Returns true when ready to fire.
fn cool_down(tower: &mut Tower, dt: f64) -> bool {
    tower.cooldown = (tower.cooldown - dt).max(0.0);
    tower.cooldown <= 0.0
}

fn reload_time(fire_rate: f64) -> f64 {
    if fire_rate > 0.0 {
        1.0 / fire_rate
    } else {
        f64::INFINITY
    }
}

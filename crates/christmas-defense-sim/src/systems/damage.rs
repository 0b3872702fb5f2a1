//! Damage resolution. The single place where enemies lose health and die.

use hecs::{Entity, World};

use christmas_defense_core::components::Enemy;
use christmas_defense_core::enums::EnemyFate;
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::types::Position;

use crate::ledger::Ledger;

/// Subtract `amount` from an enemy's health.
///
/// Returns the reward when this hit killed it. Enemies that are already dead
/// or have reached the end are left untouched, so a kill resolves exactly once.
pub fn take_damage(enemy: &mut Enemy, amount: f64) -> Option<u32> {
    if !enemy.fate.is_alive() {
        return None;
    }
    enemy.health -= amount;
    if enemy.health <= 0.0 {
        enemy.fate = EnemyFate::Dead;
        Some(enemy.reward)
    } else {
        None
    }
}

/// Damage an enemy entity and credit the reward if it dies.
/// Returns true when the entity was alive and got hit.
pub fn damage_entity(
    world: &mut World,
    target: Entity,
    amount: f64,
    ledger: &mut Ledger,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Ok((enemy, position)) = world.query_one_mut::<(&mut Enemy, &Position)>(target) else {
        return false;
    };
    if !enemy.fate.is_alive() {
        return false;
    }
    if let Some(reward) = take_damage(enemy, amount) {
        ledger.credit_kill(reward);
        events.push(GameEvent::EnemyKilled {
            kind: enemy.kind,
            position: *position,
            reward,
        });
    }
    true
}

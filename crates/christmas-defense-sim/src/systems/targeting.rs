//! Target acquisition shared by towers and area shots.
//!
//! Towers take the FIRST eligible enemy in spawn order, not the nearest one.
//! Changing this to nearest-target selection alters balance and breaks
//! deterministic replays.

use hecs::{Entity, World};

use christmas_defense_core::components::{Enemy, SpawnOrder};
use christmas_defense_core::geometry::within_radius;
use christmas_defense_core::types::Position;

/// A live enemy that towers may shoot at.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub entity: Entity,
    pub position: Position,
}

/// Every enemy entity, dead or alive, in spawn order.
pub fn enemies_in_spawn_order(world: &World) -> Vec<Entity> {
    let mut ordered: Vec<(SpawnOrder, Entity)> = world
        .query::<(&Enemy, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_enemy, order))| (*order, entity))
        .collect();
    ordered.sort_unstable_by_key(|(order, _)| *order);
    ordered.into_iter().map(|(_, entity)| entity).collect()
}

/// Enemies that are alive and still on the path, in spawn order.
pub fn live_enemies(world: &World) -> Vec<Candidate> {
    let mut live: Vec<(SpawnOrder, Candidate)> = world
        .query::<(&Enemy, &Position, &SpawnOrder)>()
        .iter()
        .filter(|(_, (enemy, _, _))| enemy.fate.is_alive())
        .map(|(entity, (_enemy, position, order))| {
            (
                *order,
                Candidate {
                    entity,
                    position: *position,
                },
            )
        })
        .collect();
    live.sort_unstable_by_key(|(order, _)| *order);
    live.into_iter().map(|(_, candidate)| candidate).collect()
}

/// First candidate within `range` of `origin`.
pub fn first_in_range<'a>(
    candidates: &'a [Candidate],
    origin: &Position,
    range: f64,
) -> Option<&'a Candidate> {
    candidates
        .iter()
        .find(|c| within_radius(&c.position, origin, range))
}

/// All candidates within `range` of `origin`, in order.
pub fn all_in_range<'a>(
    candidates: &'a [Candidate],
    origin: &'a Position,
    range: f64,
) -> impl Iterator<Item = &'a Candidate> + 'a {
    candidates
        .iter()
        .filter(move |c| within_radius(&c.position, origin, range))
}

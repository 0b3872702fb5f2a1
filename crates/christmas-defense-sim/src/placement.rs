//! Tower placement validation.

use hecs::World;

use christmas_defense_core::commands::CommandError;
use christmas_defense_core::components::Tower;
use christmas_defense_core::constants::{FIELD_HEIGHT, FIELD_WIDTH, PATH_CLEARANCE, TILE_SIZE};
use christmas_defense_core::enums::TowerType;
use christmas_defense_core::level::PathDef;
use christmas_defense_core::types::Position;

/// Centre of tile (`tile_x`, `tile_y`) in playfield coordinates.
pub fn tile_center(tile_x: i32, tile_y: i32) -> Position {
    Position::new(
        tile_x as f64 * TILE_SIZE + TILE_SIZE / 2.0,
        tile_y as f64 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

/// Tile containing a playfield point.
pub fn tile_at(position: &Position) -> (i32, i32) {
    (
        (position.x / TILE_SIZE).floor() as i32,
        (position.y / TILE_SIZE).floor() as i32,
    )
}

/// Check whether a tower may be bought and placed on a tile.
/// Returns the tower position on success. Nothing is mutated.
pub fn validate_placement(
    world: &World,
    path: &PathDef,
    tile_x: i32,
    tile_y: i32,
    tower: TowerType,
    cookies: u32,
) -> Result<Position, CommandError> {
    let center = tile_center(tile_x, tile_y);

    if !inside_field(&center) {
        return Err(CommandError::OutOfBounds { tile_x, tile_y });
    }
    if path.blocks_placement(&center, PATH_CLEARANCE) {
        return Err(CommandError::OnPath { tile_x, tile_y });
    }
    if is_occupied(world, &center) {
        return Err(CommandError::Occupied { tile_x, tile_y });
    }
    let cost = tower.cost();
    if cookies < cost {
        return Err(CommandError::InsufficientFunds {
            cost,
            available: cookies,
        });
    }
    Ok(center)
}

fn inside_field(p: &Position) -> bool {
    (0.0..=FIELD_WIDTH).contains(&p.x) && (0.0..=FIELD_HEIGHT).contains(&p.y)
}

/// A tower already stands within half a tile on both axes.
fn is_occupied(world: &World, center: &Position) -> bool {
    world
        .query::<(&Tower, &Position)>()
        .iter()
        .any(|(_, (_tower, pos))| {
            (pos.x - center.x).abs() < TILE_SIZE / 2.0 && (pos.y - center.y).abs() < TILE_SIZE / 2.0
        })
}

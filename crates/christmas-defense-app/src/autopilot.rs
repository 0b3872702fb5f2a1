//! Scripted player for the headless demo.
//!
//! Reads nothing but published snapshots, so it can drive either an engine
//! owned by the caller or the game loop thread.

use christmas_defense_core::commands::PlayerCommand;
use christmas_defense_core::constants::{FIELD_HEIGHT, FIELD_WIDTH, PATH_CLEARANCE, TILE_SIZE};
use christmas_defense_core::enums::{GamePhase, TowerType};
use christmas_defense_core::level::PathDef;
use christmas_defense_core::state::{GameStateSnapshot, PathView};
use christmas_defense_sim::engine::SimulationEngine;
use christmas_defense_sim::placement::tile_center;

/// Towers bought in this order, cycling.
const BUILD_ORDER: [TowerType; 6] = [
    TowerType::Cannon,
    TowerType::Cannon,
    TowerType::Frost,
    TowerType::Mortar,
    TowerType::Cannon,
    TowerType::Mortar,
];

/// Cast Blizzard once at least this many enemies are on the field.
const BLIZZARD_CROWD: usize = 8;

pub struct Autopilot {
    next_build: usize,
    /// Buildable tiles for the current level, closest to the path first.
    tiles: Vec<(i32, i32)>,
    level: usize,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            next_build: 0,
            tiles: Vec::new(),
            level: 0,
        }
    }

    /// Commands to issue after seeing `snapshot`.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::LevelComplete => return vec![PlayerCommand::AdvanceLevel],
            GamePhase::Active => {}
            _ => return Vec::new(),
        }

        if snapshot.hud.level != self.level {
            self.level = snapshot.hud.level;
            self.tiles = buildable_tiles(&snapshot.path);
        }

        let mut commands = Vec::new();
        let tower = BUILD_ORDER[self.next_build % BUILD_ORDER.len()];
        if snapshot.hud.cookies >= tower.cost() {
            if let Some((tile_x, tile_y)) = self.free_tile(snapshot) {
                commands.push(PlayerCommand::PlaceTower {
                    tile_x,
                    tile_y,
                    tower,
                });
                self.next_build += 1;
            }
        }
        if snapshot.enemies.len() >= BLIZZARD_CROWD && snapshot.hud.blizzard_cooldown <= 0.0 {
            commands.push(PlayerCommand::CastBlizzard);
        }
        commands
    }

    fn free_tile(&self, snapshot: &GameStateSnapshot) -> Option<(i32, i32)> {
        self.tiles.iter().copied().find(|&(tx, ty)| {
            let center = tile_center(tx, ty);
            !snapshot.towers.iter().any(|t| t.position == center)
        })
    }
}

/// Every tile whose centre is inside the field and clear of the path corridor,
/// ordered by distance to the path (then row, then column).
pub fn buildable_tiles(path: &PathView) -> Vec<(i32, i32)> {
    let path = PathDef::new(path.waypoints.clone(), path.corridor_width);
    let cols = (FIELD_WIDTH / TILE_SIZE) as i32;
    let rows = (FIELD_HEIGHT / TILE_SIZE) as i32;

    let mut tiles: Vec<(f64, i32, i32)> = (0..rows)
        .flat_map(|ty| (0..cols).map(move |tx| (tx, ty)))
        .filter_map(|(tx, ty)| {
            let center = tile_center(tx, ty);
            if path.blocks_placement(&center, PATH_CLEARANCE) {
                None
            } else {
                Some((path.distance_to(&center), tx, ty))
            }
        })
        .collect();
    tiles.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.2.cmp(&b.2)).then(a.1.cmp(&b.1)));
    tiles.into_iter().map(|(_, tx, ty)| (tx, ty)).collect()
}

/// Play a whole run at a fixed step until it ends or `max_ticks` elapse.
/// Returns the final snapshot.
pub fn play(engine: &mut SimulationEngine, autopilot: &mut Autopilot, dt: f64, max_ticks: u64) -> GameStateSnapshot {
    let mut snapshot = engine.snapshot();
    for _ in 0..max_ticks {
        if snapshot.phase.is_game_over() {
            break;
        }
        engine.queue_commands(autopilot.decide(&snapshot));
        snapshot = engine.tick(dt);
        for event in &snapshot.events {
            log::debug!("t={:.2}s {event:?}", snapshot.time.elapsed_secs);
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use christmas_defense_core::constants::STARTING_COOKIES;
    use christmas_defense_sim::engine::SimConfig;
    use christmas_defense_sim::scenario::default_campaign;

    fn first_snapshot() -> GameStateSnapshot {
        SimulationEngine::new(SimConfig::default()).snapshot()
    }

    #[test]
    fn test_buildable_tiles_avoid_the_path() {
        let campaign = default_campaign();
        for level in &campaign {
            let view = PathView {
                waypoints: level.path.waypoints.clone(),
                corridor_width: level.path.corridor_width,
            };
            let tiles = buildable_tiles(&view);
            assert!(!tiles.is_empty());
            for (tx, ty) in tiles {
                assert!(!level.path.blocks_placement(&tile_center(tx, ty), PATH_CLEARANCE));
            }
        }
    }

    #[test]
    fn test_first_decision_buys_a_cannon() {
        let mut pilot = Autopilot::new();
        let snapshot = first_snapshot();
        assert!(snapshot.hud.cookies >= STARTING_COOKIES);

        let commands = pilot.decide(&snapshot);
        assert!(matches!(
            commands.as_slice(),
            [PlayerCommand::PlaceTower {
                tower: TowerType::Cannon,
                ..
            }]
        ));
    }

    #[test]
    fn test_advances_after_level_complete() {
        let mut pilot = Autopilot::new();
        let mut snapshot = first_snapshot();
        snapshot.phase = GamePhase::LevelComplete;
        assert!(matches!(
            pilot.decide(&snapshot).as_slice(),
            [PlayerCommand::AdvanceLevel]
        ));

        snapshot.phase = GamePhase::Defeat;
        assert!(pilot.decide(&snapshot).is_empty());
    }

    #[test]
    fn test_autopilot_places_valid_towers() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let mut pilot = Autopilot::new();
        let snapshot = play(&mut engine, &mut pilot, 1.0 / 60.0, 3_000);

        assert!(!snapshot.towers.is_empty());
        assert!(snapshot.hud.enemies_killed > 0, "Towers should have scored kills");
    }
}

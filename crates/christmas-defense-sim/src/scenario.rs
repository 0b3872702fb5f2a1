//! Campaign definitions: the hardcoded level list.
//!
//! Each level defines its path, spawn pacing, wave count and
//! difficulty knobs. Levels are played in list order.

use christmas_defense_core::constants::DEFAULT_CORRIDOR_WIDTH;
use christmas_defense_core::level::{LevelDefinition, PathDef};
use christmas_defense_core::types::Position;

/// The default three-level campaign.
pub fn default_campaign() -> Vec<LevelDefinition> {
    vec![snowy_meadow(), frozen_lake(), north_pole()]
}

/// Level 1: "Snowy Meadow"
/// Gentle zig-zag left to right, 5 waves, no difficulty scaling.
fn snowy_meadow() -> LevelDefinition {
    LevelDefinition {
        name: "Snowy Meadow".to_string(),
        path: path(&[
            (0.0, 300.0),
            (140.0, 300.0),
            (200.0, 200.0),
            (340.0, 200.0),
            (430.0, 340.0),
            (580.0, 340.0),
            (660.0, 240.0),
            (800.0, 240.0),
        ]),
        spawn_interval: 1.5,
        max_waves: 5,
        difficulty: 1.0,
        fast_bonus: 0,
        extra_tank_wave: 4,
    }
}

/// Level 2: "Frozen Lake"
/// Long switchbacks across the whole field, 6 waves.
fn frozen_lake() -> LevelDefinition {
    LevelDefinition {
        name: "Frozen Lake".to_string(),
        path: path(&[
            (0.0, 100.0),
            (200.0, 100.0),
            (200.0, 450.0),
            (420.0, 450.0),
            (420.0, 160.0),
            (640.0, 160.0),
            (640.0, 500.0),
            (800.0, 500.0),
        ]),
        spawn_interval: 1.25,
        max_waves: 6,
        difficulty: 1.3,
        fast_bonus: 2,
        extra_tank_wave: 3,
    }
}

/// Level 3: "North Pole"
/// Tight serpentine with short straights, 7 waves, tanks from wave 2.
fn north_pole() -> LevelDefinition {
    LevelDefinition {
        name: "North Pole".to_string(),
        path: path(&[
            (0.0, 520.0),
            (120.0, 520.0),
            (120.0, 120.0),
            (300.0, 120.0),
            (300.0, 400.0),
            (500.0, 400.0),
            (500.0, 80.0),
            (700.0, 80.0),
            (700.0, 300.0),
            (800.0, 300.0),
        ]),
        spawn_interval: 1.0,
        max_waves: 7,
        difficulty: 1.6,
        fast_bonus: 3,
        extra_tank_wave: 2,
    }
}

fn path(points: &[(f64, f64)]) -> PathDef {
    PathDef::new(
        points.iter().map(|&(x, y)| Position::new(x, y)).collect(),
        DEFAULT_CORRIDOR_WIDTH,
    )
}

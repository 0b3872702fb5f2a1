//! Level definitions: path geometry, spawn pacing and difficulty knobs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry;
use crate::types::Position;

/// The route enemies follow, plus the corridor around it where towers may not stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDef {
    pub waypoints: Vec<Position>,
    /// Full width of the no-build corridor (pixels).
    pub corridor_width: f64,
}

/// One level of the campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub path: PathDef,
    /// Seconds between consecutive spawns within a wave.
    pub spawn_interval: f64,
    /// Number of waves; clearing the last one completes the level.
    pub max_waves: u32,
    /// Scales enemy counts and health.
    pub difficulty: f64,
    /// Flat number of extra fast enemies from wave 3 onward.
    #[serde(default)]
    pub fast_bonus: u32,
    /// From this wave onward every wave gets one extra tank.
    pub extra_tank_wave: u32,
}

/// A malformed level definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("Level list is empty")]
    Empty,
    #[error("Level '{0}': path needs at least two waypoints")]
    PathTooShort(String),
    #[error("Level '{name}': waypoint {index} coincides with the one after it")]
    RepeatedWaypoint { name: String, index: usize },
    #[error("Level '{0}': corridor width must be positive")]
    BadCorridor(String),
    #[error("Level '{0}': needs at least one wave")]
    NoWaves(String),
    #[error("Level '{0}': spawn interval must be positive")]
    BadSpawnInterval(String),
    #[error("Level '{0}': difficulty must be positive")]
    BadDifficulty(String),
    #[error("Level file could not be parsed: {0}")]
    Parse(String),
}

impl PathDef {
    pub fn new(waypoints: Vec<Position>, corridor_width: f64) -> Self {
        Self {
            waypoints,
            corridor_width,
        }
    }

    pub fn start(&self) -> Position {
        self.waypoints.first().copied().unwrap_or_default()
    }

    /// Distance from `p` to the nearest path segment.
    pub fn distance_to(&self, p: &Position) -> f64 {
        geometry::point_polyline_distance(p, &self.waypoints)
    }

    /// Whether a tower centred on `p` would intrude on the corridor.
    pub fn blocks_placement(&self, p: &Position, clearance: f64) -> bool {
        self.distance_to(p) <= self.corridor_width / 2.0 + clearance
    }

    /// Total length of the polyline.
    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }
}

impl LevelDefinition {
    pub fn validate(&self) -> Result<(), LevelError> {
        let points = &self.path.waypoints;
        if points.len() < 2 {
            return Err(LevelError::PathTooShort(self.name.clone()));
        }
        if let Some(index) = points.windows(2).position(|w| w[0] == w[1]) {
            return Err(LevelError::RepeatedWaypoint {
                name: self.name.clone(),
                index,
            });
        }
        if self.path.corridor_width <= 0.0 {
            return Err(LevelError::BadCorridor(self.name.clone()));
        }
        if self.max_waves == 0 {
            return Err(LevelError::NoWaves(self.name.clone()));
        }
        if self.spawn_interval <= 0.0 {
            return Err(LevelError::BadSpawnInterval(self.name.clone()));
        }
        if self.difficulty <= 0.0 {
            return Err(LevelError::BadDifficulty(self.name.clone()));
        }
        Ok(())
    }
}

/// Validate an ordered level list.
pub fn validate_levels(levels: &[LevelDefinition]) -> Result<(), LevelError> {
    if levels.is_empty() {
        return Err(LevelError::Empty);
    }
    levels.iter().try_for_each(LevelDefinition::validate)
}

/// Parse and validate a JSON array of level definitions.
pub fn levels_from_json(json: &str) -> Result<Vec<LevelDefinition>, LevelError> {
    let levels: Vec<LevelDefinition> =
        serde_json::from_str(json).map_err(|e| LevelError::Parse(e.to_string()))?;
    validate_levels(&levels)?;
    Ok(levels)
}

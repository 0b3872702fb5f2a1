//! Simulation constants and tuning parameters.

// --- Timing ---

/// Largest frame delta the simulation accepts (seconds).
/// Bigger deltas let fast projectiles and enemies tunnel past waypoints.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Delay before the first spawn of every wave (seconds).
pub const WAVE_START_DELAY: f64 = 2.0;

// --- Playfield ---

/// Side length of a placement tile (pixels).
pub const TILE_SIZE: f64 = 40.0;

/// Playfield width (pixels).
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height (pixels).
pub const FIELD_HEIGHT: f64 = 600.0;

/// Extra clearance added to half the corridor width when rejecting placements.
pub const PATH_CLEARANCE: f64 = 6.0;

/// Corridor width used by the default campaign.
pub const DEFAULT_CORRIDOR_WIDTH: f64 = 80.0;

// --- Economy ---

pub const STARTING_COOKIES: u32 = 100;
pub const STARTING_LIVES: u32 = 20;

/// Cookies awarded when a wave is cleared and the next one begins.
pub const WAVE_CLEAR_BONUS: u32 = 30;

/// Cookies awarded on the transition to the next level.
pub const LEVEL_COMPLETE_BONUS: u32 = 100;

// --- Enemy movement ---

/// A waypoint counts as reached when the step covers all but this much distance.
pub const WAYPOINT_SNAP_EPSILON: f64 = 0.5;

/// Below this distance the enemy is considered to be on its next waypoint.
pub const WAYPOINT_ARRIVE_DISTANCE: f64 = 1.0;

// --- Enemies: (base speed, speed jitter, base health, health per wave, regen/s, reward) ---

pub const NORMAL_BASE_SPEED: f64 = 45.0;
pub const NORMAL_SPEED_JITTER: f64 = 15.0;
pub const NORMAL_BASE_HEALTH: f64 = 10.0;
pub const NORMAL_HEALTH_PER_WAVE: f64 = 2.0;
pub const NORMAL_REWARD: u32 = 5;

pub const TANK_BASE_SPEED: f64 = 26.0;
pub const TANK_SPEED_JITTER: f64 = 8.0;
pub const TANK_BASE_HEALTH: f64 = 36.0;
pub const TANK_HEALTH_PER_WAVE: f64 = 6.0;
pub const TANK_REGEN_PER_SEC: f64 = 2.0;
pub const TANK_REWARD: u32 = 12;

pub const FAST_BASE_SPEED: f64 = 85.0;
pub const FAST_SPEED_JITTER: f64 = 20.0;
pub const FAST_BASE_HEALTH: f64 = 6.0;
pub const FAST_HEALTH_PER_WAVE: f64 = 1.0;
pub const FAST_REWARD: u32 = 4;

// --- Towers ---

/// Candy cane cannon: single-target homing shots.
pub const CANNON_COST: u32 = 50;
pub const CANNON_RANGE: f64 = 110.0;
pub const CANNON_FIRE_RATE: f64 = 1.1;
pub const CANNON_DAMAGE: f64 = 5.0;
pub const CANNON_PROJECTILE_SPEED: f64 = 220.0;

/// Frost tower: continuous slow aura, no projectiles.
pub const FROST_COST: u32 = 70;
pub const FROST_RANGE: f64 = 90.0;
pub const FROST_SLOW_FACTOR: f64 = 0.5;
pub const FROST_SLOW_DURATION: f64 = 1.0;

/// Snowball mortar: lobbed area shots.
pub const MORTAR_COST: u32 = 90;
pub const MORTAR_RANGE: f64 = 140.0;
pub const MORTAR_FIRE_RATE: f64 = 0.5;
pub const MORTAR_DAMAGE: f64 = 8.0;
pub const MORTAR_SPLASH_RADIUS: f64 = 50.0;
pub const MORTAR_PROJECTILE_SPEED: f64 = 160.0;

// --- Projectiles ---

/// Extra hit distance on top of the per-tick step, so fast shots cannot overshoot.
pub const PROJECTILE_HIT_EPSILON: f64 = 1.0;

/// How long an area shot stays in its exploding state (seconds).
pub const EXPLOSION_DURATION: f64 = 0.2;

// --- Blizzard (global slow ability) ---

pub const BLIZZARD_SLOW_FACTOR: f64 = 0.4;
pub const BLIZZARD_DURATION: f64 = 3.0;
pub const BLIZZARD_COOLDOWN: f64 = 20.0;

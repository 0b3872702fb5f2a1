//! Wave director: wave composition and spawn pacing.

use std::collections::VecDeque;

use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use christmas_defense_core::constants::WAVE_START_DELAY;
use christmas_defense_core::enums::EnemyKind;
use christmas_defense_core::events::GameEvent;
use christmas_defense_core::level::LevelDefinition;

use crate::world_setup;

/// Wave at which the level's flat fast-enemy bonus kicks in.
const FAST_BONUS_FROM_WAVE: u32 = 3;

/// How many enemies of each kind a wave contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveComposition {
    pub normal: u32,
    pub tank: u32,
    pub fast: u32,
}

/// Pending spawns for the current wave plus the pacing timer.
#[derive(Debug, Clone, Default)]
pub struct SpawnDirector {
    pub queue: VecDeque<EnemyKind>,
    /// Seconds until the next spawn.
    pub timer: f64,
}

impl WaveComposition {
    pub fn total(&self) -> u32 {
        self.normal + self.tank + self.fast
    }

    pub fn count(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::Normal => self.normal,
            EnemyKind::Tank => self.tank,
            EnemyKind::Fast => self.fast,
        }
    }

    /// Expand into one tag per enemy, grouped by kind.
    pub fn to_tags(&self) -> Vec<EnemyKind> {
        [EnemyKind::Normal, EnemyKind::Tank, EnemyKind::Fast]
            .into_iter()
            .flat_map(|kind| std::iter::repeat(kind).take(self.count(kind) as usize))
            .collect()
    }
}

impl SpawnDirector {
    /// Compose wave `wave` for `level`, shuffle it into the queue and reset
    /// the pacing timer.
    pub fn prepare_wave(
        &mut self,
        wave: u32,
        level: &LevelDefinition,
        rng: &mut ChaCha8Rng,
    ) -> WaveComposition {
        let composition = compose_wave(wave, level);
        self.queue = build_spawn_queue(&composition, rng);
        self.timer = WAVE_START_DELAY;
        composition
    }

    /// True once every enemy of the wave has been released.
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> u32 {
        self.queue.len() as u32
    }
}

/// Unscaled composition from the fixed progression table.
/// Waves 1-4 are hand-tuned; later waves grow linearly with `wave - 4`.
pub fn base_composition(wave: u32) -> WaveComposition {
    match wave {
        0 | 1 => WaveComposition {
            normal: 6,
            tank: 0,
            fast: 0,
        },
        2 => WaveComposition {
            normal: 8,
            tank: 0,
            fast: 2,
        },
        3 => WaveComposition {
            normal: 9,
            tank: 1,
            fast: 3,
        },
        4 => WaveComposition {
            normal: 10,
            tank: 1,
            fast: 4,
        },
        _ => {
            let extra = wave - 4;
            WaveComposition {
                normal: 10 + 2 * extra,
                tank: 1 + extra,
                fast: 4 + extra,
            }
        }
    }
}

/// Composition of `wave` on `level`, after difficulty scaling and the
/// level's tank/fast knobs.
pub fn compose_wave(wave: u32, level: &LevelDefinition) -> WaveComposition {
    let base = base_composition(wave);
    let scale = |count: u32| (count as f64 * level.difficulty).round().max(0.0) as u32;

    let mut composition = WaveComposition {
        normal: scale(base.normal),
        // Difficulty below 1.0 must not remove tanks.
        tank: scale(base.tank).max(base.tank),
        fast: scale(base.fast),
    };
    if wave >= level.extra_tank_wave {
        composition.tank += 1;
    }
    if wave >= FAST_BONUS_FROM_WAVE {
        composition.fast += level.fast_bonus;
    }
    composition
}

/// Materialize a composition and Fisher–Yates shuffle it.
pub fn build_spawn_queue(composition: &WaveComposition, rng: &mut ChaCha8Rng) -> VecDeque<EnemyKind> {
    let mut tags = composition.to_tags();
    // `SliceRandom::shuffle` is an in-place Fisher–Yates shuffle.
    tags.shuffle(rng);
    tags.into()
}

/// Tick the pacing timer and release at most one enemy.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut SpawnDirector,
    level: &LevelDefinition,
    wave: u32,
    dt: f64,
    next_order: &mut u64,
    events: &mut Vec<GameEvent>,
) {
    if director.is_exhausted() {
        return;
    }
    director.timer -= dt;
    if director.timer > 0.0 {
        return;
    }
    if let Some(kind) = director.queue.pop_front() {
        world_setup::spawn_enemy(world, rng, kind, wave, level, *next_order);
        *next_order += 1;
        director.timer = level.spawn_interval;
        events.push(GameEvent::EnemySpawned { kind });
    }
}
